//! End-to-end windowing scenarios over concrete sources

use windrow_core::{
    FixedWindows, Pair, PairSequence, Select, SequentialDistinct, SlidingWindows, Take,
    VariableWindows, WithIndex, Window,
};

fn columns(index: &[i32], values: &[i32]) -> Vec<Pair<i32, i32>> {
    assert_eq!(index.len(), values.len());
    index
        .iter()
        .copied()
        .zip(values.iter().copied())
        .map(Pair::from)
        .collect()
}

fn counted(values: &[i32]) -> Vec<Pair<usize, i32>> {
    values
        .iter()
        .copied()
        .enumerate()
        .map(|(i, v)| Pair::new(i, v))
        .collect()
}

#[test]
fn fixed_windows_even_rows_even_period() {
    let source = columns(&[10, 20, 30, 40], &[1, 2, 3, 4]);
    let windows = FixedWindows::new(source, 2).unwrap();

    let values: Vec<Vec<i32>> = windows.cursor().map(|w| w.value.to_values()).collect();
    assert_eq!(values, vec![vec![1, 2], vec![3, 4]]);

    let last_indices: Vec<i32> = windows.cursor().map(|w| *w.value.last_index()).collect();
    assert_eq!(last_indices, vec![20, 40]);
}

#[test]
fn fixed_windows_odd_rows_even_period() {
    let source = columns(&[10, 20, 30, 40, 50], &[1, 2, 3, 4, 5]);
    let windows = FixedWindows::new(source, 2).unwrap();

    let values: Vec<Vec<i32>> = windows.cursor().map(|w| w.value.to_values()).collect();
    assert_eq!(values, vec![vec![1, 2], vec![3, 4], vec![5]]);

    let first_indices: Vec<i32> = windows.cursor().map(|w| *w.value.first_index()).collect();
    assert_eq!(first_indices, vec![10, 30, 50]);
}

#[test]
fn sliding_windows_advance_one_element_per_emission() {
    let source = counted(&[1, 2, 3, 4, 5, 6]);
    let windows = SlidingWindows::new(source, 2).unwrap();

    let values: Vec<Vec<i32>> = windows.cursor().map(|w| w.value.to_values()).collect();
    assert_eq!(
        values,
        vec![
            vec![1, 2],
            vec![2, 3],
            vec![3, 4],
            vec![4, 5],
            vec![5, 6],
        ]
    );
}

#[test]
fn sliding_windows_need_a_full_period_of_data() {
    let source = counted(&[1, 2]);
    let windows = SlidingWindows::new(source, 3).unwrap();

    assert_eq!(windows.cursor().count(), 0);
}

#[test]
fn variable_windows_split_on_adjacent_inequality() {
    let source = counted(&[1, 1, 2, 1, 1, 2, 3, 4, 3, 3]);
    let windows = VariableWindows::new(source, |a: &i32, b: &i32| a == b);

    let run_lengths: Vec<usize> = windows.cursor().map(|w| w.value.len()).collect();
    assert_eq!(run_lengths, vec![2, 1, 2, 1, 1, 1, 2]);

    let first_indices: Vec<usize> = windows.cursor().map(|w| *w.value.first_index()).collect();
    assert_eq!(first_indices, vec![0, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn sequential_distinct_keeps_the_first_pair_of_each_run() {
    let source = counted(&[1, 1, 2, 3, 3, 3, 5, 6, 6, 7]);
    let distinct = SequentialDistinct::new(source, |v: &i32| *v);

    let pairs: Vec<(usize, i32)> = distinct.cursor().map(Pair::into_tuple).collect();
    assert_eq!(pairs, vec![(0, 1), (2, 2), (3, 3), (6, 5), (7, 6), (9, 7)]);
}

#[test]
fn windows_flow_through_the_pipeline_combinators() {
    // Re-key each window by its last source index, then reduce it to a sum.
    let source = columns(&[10, 20, 30, 40, 50], &[1, 2, 3, 4, 5]);
    let windows = FixedWindows::new(source, 2).unwrap();
    let rekeyed = WithIndex::new(windows, |w: &Window<i32, i32>| *w.last_index());
    let sums = Select::new(rekeyed, |w: Window<i32, i32>| w.values().sum::<i32>());

    let pairs: Vec<(i32, i32)> = sums.cursor().map(Pair::into_tuple).collect();
    assert_eq!(pairs, vec![(20, 3), (40, 7), (50, 5)]);
}

#[test]
fn a_window_can_be_windowed_again() {
    let source = counted(&[1, 2, 3, 4, 5, 6]);
    let outer = FixedWindows::new(source, 4).unwrap();

    let first: Window<usize, i32> = outer.cursor().next().unwrap().value;
    let inner = SlidingWindows::new(first, 2).unwrap();

    let values: Vec<Vec<i32>> = inner.cursor().map(|w| w.value.to_values()).collect();
    assert_eq!(values, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
}

#[test]
fn bounding_a_window_sequence_stops_early() {
    let source = counted(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let windows = SlidingWindows::new(source, 3).unwrap();
    let bounded = Take::new(windows, 2);

    let values: Vec<Vec<i32>> = bounded.cursor().map(|w| w.value.to_values()).collect();
    assert_eq!(values, vec![vec![1, 2, 3], vec![2, 3, 4]]);
}
