use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strava_desk_miles::models::{Activity, DeskTreadmillStats};

fn benchmark_aggregate(c: &mut Criterion) {
    // A long history: every tenth activity is a desk treadmill walk
    let activities: Vec<Activity> = (0..10_000u64)
        .map(|id| Activity {
            id,
            name: if id % 10 == 0 {
                "Desk Treadmill".to_string()
            } else {
                format!("Afternoon Ride {}", id)
            },
            distance: 1609.34,
            ..Default::default()
        })
        .collect();

    c.bench_function("aggregate_10k_activities", |b| {
        b.iter(|| DeskTreadmillStats::from_activities(black_box(&activities)))
    });
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
