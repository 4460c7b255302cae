//! Basic usage of the fluent sequence API

use windrow::Sequence;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed windows: partition a series into groups of three.
    println!("=== Fixed windows ===");
    let series = Sequence::from_values(vec![1, 2, 3, 4, 5, 6, 7]);
    for pair in series.window(3)?.pairs() {
        println!("window {}: {:?}", pair.index, pair.value.to_values());
    }

    // Rolling windows: a three-point moving sum keyed by the last position.
    println!("\n=== Rolling windows ===");
    let sums = series
        .rolling_window(3)?
        .with_index(|w| *w.last_index())
        .select(|w| w.values().sum::<i32>());
    for (index, sum) in sums.to_pairs() {
        println!("up to position {index}: sum {sum}");
    }

    // Variable windows: group a noisy signal into runs of similar readings.
    println!("\n=== Variable windows ===");
    let readings = Sequence::from_values(vec![1.0, 1.1, 1.2, 5.0, 5.1, 1.0]);
    let runs = readings.variable_window(|a: &f64, b: &f64| (a - b).abs() < 0.5);
    for pair in runs.pairs() {
        println!("run {}: {:?}", pair.index, pair.value.to_values());
    }

    // Sequential distinct: collapse consecutive repeats, keeping first seen.
    println!("\n=== Sequential distinct ===");
    let states = Sequence::from_values(vec!["idle", "idle", "busy", "busy", "idle"]);
    println!("{:?}", states.sequential_distinct().to_pairs());

    // Bounding an unbounded generated sequence.
    println!("\n=== Generated + take ===");
    let squares = Sequence::generate(|| (0usize..).map(|i| windrow::Pair::new(i, i * i)));
    println!("{:?}", squares.take(6).to_values());

    Ok(())
}
