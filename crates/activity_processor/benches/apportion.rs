use activity_processor::{ActivitySummary, ActivityType, DataProcessor, Lap, Sample};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const LAPS: usize = 200;

fn block(seed: usize) -> Sample {
    // 10 minutes at 1 reading per second.
    let data = (0..600)
        .map(|i| (110 + (seed + i) % 70).to_string())
        .collect::<Vec<_>>()
        .join(",");
    Sample::heart_rate(data)
}

fn loaded_processor(activity_type: ActivityType, blocks_per_lap: usize) -> DataProcessor {
    let mut processor = DataProcessor::default();
    let summary = ActivitySummary::new("bench", activity_type, "Watch", 190.0, 120_000.0);
    processor.load_activity_summary(summary).expect("summary");
    processor
        .load_laps(
            (0..LAPS)
                .map(|i| Lap::new(i as f64 * 600.0, 1000.0, 600.0))
                .collect(),
        )
        .expect("laps");
    processor
        .load_samples((0..LAPS * blocks_per_lap).map(block).collect())
        .expect("samples");
    processor
}

fn bench_process(c: &mut Criterion) {
    let generic = loaded_processor(ActivityType::Running, 1);
    c.bench_function("process_generic_200_laps", |b| {
        b.iter(|| black_box(generic.process().expect("process")))
    });

    let indoor = loaded_processor(ActivityType::IndoorCycling, 2);
    c.bench_function("process_indoor_cycling_200_laps", |b| {
        b.iter(|| black_box(indoor.process().expect("process")))
    });
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
