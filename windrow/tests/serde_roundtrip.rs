//! Serialization round-trips for the pair and window types

#![cfg(feature = "serde")]

use windrow::{Pair, Sequence, Window};

#[test]
fn pair_round_trips_through_json() {
    let pair = Pair::new(7usize, "seven".to_string());

    let encoded = serde_json::to_string(&pair).unwrap();
    let decoded: Pair<usize, String> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(pair, decoded);
}

#[test]
fn window_round_trips_through_json() {
    let series = Sequence::from_values(vec![1, 2, 3, 4, 5]);
    let window: Window<usize, i32> = series
        .window(2)
        .unwrap()
        .first()
        .map(|(_, window)| window)
        .unwrap();

    let encoded = serde_json::to_string(&window).unwrap();
    let decoded: Window<usize, i32> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(window, decoded);
    assert_eq!(decoded.to_values(), vec![1, 2]);
}
