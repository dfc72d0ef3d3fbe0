//! The processing pipeline.
//!
//! Records are validated as they are loaded; cross-record rules and the lap
//! breakdown run on [`DataProcessor::process`].

use std::fmt;

use tracing::debug;

use crate::apportion::{LapSampleLayout, heart_rate_samples_for_lap};
use crate::config::ProcessorConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::types::{
    ActivityData, ActivityOverview, ActivitySummary, Lap, LapData, ProcessedOutput, Sample,
};
use crate::validators::{
    ActivityDataValidator, LapsValidator, SamplesValidator, SummaryValidator, Validator,
};

type LapsCheck = dyn Validator<[Lap]> + Send + Sync;
type SummaryCheck = dyn Validator<ActivitySummary> + Send + Sync;
type SamplesCheck = dyn Validator<[Sample]> + Send + Sync;
type ActivityDataCheck = dyn for<'a> Validator<ActivityData<'a>> + Send + Sync;

/// Holds the records of one activity and turns them into a [`ProcessedOutput`].
///
/// Each record kind is held at most once; loading it again replaces the
/// previous value. Use one processor per activity.
pub struct DataProcessor {
    activity_summary: Option<ActivitySummary>,
    laps: Option<Vec<Lap>>,
    /// Heart-rate blocks only, in loaded order.
    samples: Option<Vec<Sample>>,
    laps_validator: Box<LapsCheck>,
    summary_validator: Box<SummaryCheck>,
    samples_validator: Box<SamplesCheck>,
    activity_data_validator: Box<ActivityDataCheck>,
}

impl DataProcessor {
    /// Processor with the stock validators configured from `config`.
    pub fn new(config: &ProcessorConfig) -> Self {
        Self::with_validators(
            LapsValidator,
            SummaryValidator::new(config.max_heart_rate_ceiling),
            SamplesValidator,
            ActivityDataValidator,
        )
    }

    /// Processor using caller supplied validators.
    pub fn with_validators<L, S, M, A>(
        laps_validator: L,
        summary_validator: S,
        samples_validator: M,
        activity_data_validator: A,
    ) -> Self
    where
        L: Validator<[Lap]> + Send + Sync + 'static,
        S: Validator<ActivitySummary> + Send + Sync + 'static,
        M: Validator<[Sample]> + Send + Sync + 'static,
        A: for<'a> Validator<ActivityData<'a>> + Send + Sync + 'static,
    {
        Self {
            activity_summary: None,
            laps: None,
            samples: None,
            laps_validator: Box::new(laps_validator),
            summary_validator: Box::new(summary_validator),
            samples_validator: Box::new(samples_validator),
            activity_data_validator: Box::new(activity_data_validator),
        }
    }

    pub fn load_activity_summary(&mut self, summary: ActivitySummary) -> ValidationResult<()> {
        self.summary_validator.validate(&summary)?;
        debug!(
            user_id = %summary.user_id,
            activity_type = ?summary.activity_type,
            "loaded activity summary"
        );
        self.activity_summary = Some(summary);
        Ok(())
    }

    pub fn load_laps(&mut self, laps: Vec<Lap>) -> ValidationResult<()> {
        self.laps_validator.validate(&laps)?;
        debug!(laps = laps.len(), "loaded laps");
        self.laps = Some(laps);
        Ok(())
    }

    /// Validates all of `samples`, then keeps only the heart-rate blocks.
    pub fn load_samples(&mut self, samples: Vec<Sample>) -> ValidationResult<()> {
        self.samples_validator.validate(&samples)?;
        let total = samples.len();
        let heart_rate: Vec<Sample> = samples.into_iter().filter(Sample::is_heart_rate).collect();
        debug!(total, heart_rate = heart_rate.len(), "loaded samples");
        self.samples = Some(heart_rate);
        Ok(())
    }

    /// True once a summary, laps and samples have all been loaded.
    pub fn is_ready(&self) -> bool {
        self.activity_summary.is_some() && self.laps.is_some() && self.samples.is_some()
    }

    /// Builds the overview and per-lap breakdown from the loaded records.
    ///
    /// Loaded state is left untouched, so repeated calls give equal results.
    pub fn process(&self) -> ValidationResult<ProcessedOutput> {
        let (Some(summary), Some(laps), Some(samples)) =
            (&self.activity_summary, &self.laps, &self.samples)
        else {
            return Err(ValidationError::Data(
                "Activity summary, laps, and samples must be loaded before processing.".into(),
            ));
        };

        self.activity_data_validator.validate(&ActivityData {
            summary,
            laps,
            samples,
        })?;

        let layout = LapSampleLayout::for_optional(summary.activity_type);
        let laps_data: Vec<LapData> = laps
            .iter()
            .enumerate()
            .map(|(index, lap)| LapData {
                start_time: lap.start_time_in_seconds,
                distance: lap.total_distance_in_meters,
                duration: lap.timer_duration_in_seconds,
                heart_rate_samples: heart_rate_samples_for_lap(samples, index, layout),
            })
            .collect();

        debug!(laps = laps_data.len(), ?layout, "processed activity");
        Ok(ProcessedOutput {
            activity_overview: ActivityOverview::from(summary),
            laps_data,
        })
    }
}

impl Default for DataProcessor {
    fn default() -> Self {
        Self::new(&ProcessorConfig::default())
    }
}

impl fmt::Debug for DataProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProcessor")
            .field("activity_summary", &self.activity_summary)
            .field("laps", &self.laps.as_ref().map(Vec::len))
            .field("samples", &self.samples.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}
