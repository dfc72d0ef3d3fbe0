use super::Validator;
use crate::apportion::LapSampleLayout;
use crate::error::{ValidationError, ValidationResult};
use crate::types::{ActivityData, ActivitySummary, Lap, Sample};

/// Consistency checks across the summary, laps and heart-rate samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActivityDataValidator;

impl ActivityDataValidator {
    fn validate_sample_count(&self, data: &ActivityData<'_>) -> ValidationResult<()> {
        let layout = LapSampleLayout::for_optional(data.summary.activity_type);
        if data.samples.len() >= layout.required_blocks(data.laps.len()) {
            return Ok(());
        }
        let message = match layout {
            LapSampleLayout::TwoBlocksPerLap => {
                "There must be at least 2 samples per lap for indoor cycling."
            }
            LapSampleLayout::OneBlockPerLap => {
                "The number of samples must be at least as many as the number of laps."
            }
        };
        Err(ValidationError::CrossRecord(message.into()))
    }

    // Reserved: total lap time against the summary duration. No rule yet.
    fn validate_activity_duration(
        &self,
        _laps: &[Lap],
        _summary: &ActivitySummary,
    ) -> ValidationResult<()> {
        Ok(())
    }

    // Reserved: readings against the summary max heart rate. No rule yet.
    fn validate_heart_rate_boundaries(
        &self,
        _samples: &[Sample],
        _summary: &ActivitySummary,
    ) -> ValidationResult<()> {
        Ok(())
    }
}

impl<'a> Validator<ActivityData<'a>> for ActivityDataValidator {
    fn validate(&self, data: &ActivityData<'a>) -> ValidationResult<()> {
        self.validate_sample_count(data)?;
        self.validate_activity_duration(data.laps, data.summary)?;
        self.validate_heart_rate_boundaries(data.samples, data.summary)
    }
}
