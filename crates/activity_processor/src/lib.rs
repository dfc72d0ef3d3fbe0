//! Validation and lap apportionment for a single recorded activity.
//!
//! A [`DataProcessor`] accepts an [`ActivitySummary`], its [`Lap`] records and
//! the raw [`Sample`] blocks, checks each record as it is loaded, and produces a
//! [`ProcessedOutput`] with an activity overview and heart-rate readings split
//! per lap.

pub mod apportion;
pub mod config;
pub mod error;
pub mod processor;
pub mod types;
pub mod validators;

pub use apportion::LapSampleLayout;
pub use config::{ConfigError, ProcessorConfig};
pub use error::{ValidationError, ValidationResult};
pub use processor::DataProcessor;
pub use types::{
    ActivityData, ActivityOverview, ActivitySummary, ActivityType, Lap, LapData,
    LapHeartRateSample, ProcessedOutput, Sample, SampleType,
};
pub use validators::{
    ActivityDataValidator, LapsValidator, SamplesValidator, SummaryValidator, Validator,
};
