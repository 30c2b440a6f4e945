use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use structureseedcracker::constraint::{Constraint, Rotation, ShipwreckConstraint};
use structureseedcracker::{bruteforce, prefilter};

fn scan_small_upper_space(constraints: &[Constraint]) -> usize {
    let low = prefilter::run(constraints);
    let low: Vec<u32> = low.into_iter().take(64).collect();
    bruteforce::run(constraints, &low).len()
}

fn bruteforce_benchmark(c: &mut Criterion) {
    let constraints = vec![Constraint::Shipwreck(ShipwreckConstraint {
        chunk_x: -54,
        chunk_z: -14,
        rotation: Rotation::CounterClockwise90,
        shipwreck_type: "sideways_fronthalf".to_string(),
        is_beached: false,
    })];

    let mut group = c.benchmark_group("bruteforce");
    group
        .sample_size(10)
        .measurement_time(Duration::from_secs(30))
        .bench_with_input(
            BenchmarkId::new("scan_small_upper_space", "single_shipwreck"),
            &constraints,
            |b, input| b.iter(|| scan_small_upper_space(black_box(input))),
        );
    group.finish();
}

criterion_group!(benches, bruteforce_benchmark);
criterion_main!(benches);
