//! Command line front end: reads the three activity records from JSON files
//! and runs them through a [`DataProcessor`].

use std::fs;
use std::path::{Path, PathBuf};

use activity_processor::{DataProcessor, ProcessedOutput, ProcessorConfig};
use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

/// Log filter env var, checked before `RUST_LOG`.
pub const LOG_LEVEL_ENV: &str = "ACTIVITY_PROCESSOR_LOG_LEVEL";

pub const USAGE: &str = "usage: activity-processor <summary.json> <laps.json> <samples.json>";

/// Input file paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inputs {
    pub summary: PathBuf,
    pub laps: PathBuf,
    pub samples: PathBuf,
}

impl Inputs {
    /// Parses the arguments following the program name. Exactly three paths
    /// are accepted.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let inputs = Self {
            summary: args.next()?.into(),
            laps: args.next()?.into(),
            samples: args.next()?.into(),
        };
        args.next().is_none().then_some(inputs)
    }
}

/// Log filter directive: `ACTIVITY_PROCESSOR_LOG_LEVEL`, then `RUST_LOG`,
/// then `info`.
pub fn log_filter<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get(LOG_LEVEL_ENV)
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

/// Builds the subscriber filter for `directive`, falling back to `info` when
/// the directive does not parse.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Loads every input file and processes the activity.
pub fn run(inputs: &Inputs, config: &ProcessorConfig) -> anyhow::Result<ProcessedOutput> {
    let mut processor = DataProcessor::new(config);

    processor
        .load_activity_summary(read_json(&inputs.summary)?)
        .with_context(|| format!("loading summary from {}", inputs.summary.display()))?;
    processor
        .load_laps(read_json(&inputs.laps)?)
        .with_context(|| format!("loading laps from {}", inputs.laps.display()))?;
    processor
        .load_samples(read_json(&inputs.samples)?)
        .with_context(|| format!("loading samples from {}", inputs.samples.display()))?;

    let output = processor.process().context("processing activity")?;
    tracing::info!(laps = output.laps_data.len(), "activity processed");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_args_takes_three_paths() {
        let inputs = Inputs::from_args(args(&["s.json", "l.json", "m.json"])).unwrap();
        assert_eq!(inputs.summary, PathBuf::from("s.json"));
        assert_eq!(inputs.laps, PathBuf::from("l.json"));
        assert_eq!(inputs.samples, PathBuf::from("m.json"));
    }

    #[test]
    fn from_args_rejects_wrong_arity() {
        assert!(Inputs::from_args(args(&["s.json", "l.json"])).is_none());
        assert!(Inputs::from_args(args(&["a", "b", "c", "d"])).is_none());
        assert!(Inputs::from_args(Vec::new()).is_none());
    }

    #[test]
    fn log_filter_priority() {
        let both = |k: &str| match k {
            LOG_LEVEL_ENV => Some("debug".into()),
            "RUST_LOG" => Some("warn".into()),
            _ => None,
        };
        assert_eq!(log_filter(both), "debug");

        let rust_log = |k: &str| (k == "RUST_LOG").then(|| "warn".to_string());
        assert_eq!(log_filter(rust_log), "warn");

        assert_eq!(log_filter(|_| None), "info");
    }

    #[test]
    fn env_filter_keeps_valid_directive() {
        let filter = env_filter("activity_processor=debug");
        assert_eq!(filter.to_string(), "activity_processor=debug");
    }

    #[test]
    fn env_filter_falls_back_to_info() {
        let filter = env_filter("activity_processor=loud");
        assert_eq!(filter.to_string(), "info");
    }
}
