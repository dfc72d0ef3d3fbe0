//! Helpers shared by the integration tests.
#![allow(dead_code)]

use activity_processor::{ActivitySummary, Lap, LapHeartRateSample, Sample};

pub fn fixture_summary() -> ActivitySummary {
    serde_json::from_str(include_str!("../fixtures/summary.json")).expect("summary fixture")
}

pub fn fixture_laps() -> Vec<Lap> {
    serde_json::from_str(include_str!("../fixtures/laps.json")).expect("laps fixture")
}

pub fn fixture_samples() -> Vec<Sample> {
    serde_json::from_str(include_str!("../fixtures/samples.json")).expect("samples fixture")
}

pub fn laps(n: usize) -> Vec<Lap> {
    (0..n)
        .map(|i| Lap::new(i as f64 * 600.0, 1000.0, 600.0))
        .collect()
}

/// Asserts `received` holds exactly `expected` readings, numbered from 0.
#[track_caller]
pub fn assert_heart_rate_series(received: &[LapHeartRateSample], expected: &[i64]) {
    let matches = received.len() == expected.len()
        && received
            .iter()
            .zip(expected)
            .enumerate()
            .all(|(i, (sample, hr))| sample.sample_index == i && sample.heart_rate == *hr);
    assert!(
        matches,
        "expected {received:?} to match heart rate series {expected:?}"
    );
}
