use super::Validator;
use crate::error::{ValidationError, ValidationResult};
use crate::types::ActivitySummary;

/// Physiological ceiling used when none is configured.
pub const DEFAULT_MAX_HEART_RATE: f64 = 220.0;

/// Checks the required fields of an activity summary.
#[derive(Clone, Copy, Debug)]
pub struct SummaryValidator {
    max_heart_rate: f64,
}

impl SummaryValidator {
    /// Validator rejecting summaries whose max heart rate exceeds
    /// `max_heart_rate`.
    pub fn new(max_heart_rate: f64) -> Self {
        Self { max_heart_rate }
    }

    pub fn max_heart_rate(&self) -> f64 {
        self.max_heart_rate
    }
}

impl Default for SummaryValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEART_RATE)
    }
}

impl Validator<ActivitySummary> for SummaryValidator {
    fn validate(&self, summary: &ActivitySummary) -> ValidationResult<()> {
        let fail = |msg: String| Err(ValidationError::Summary(msg));

        if summary.user_id.is_empty() {
            return fail("User ID is required.".into());
        }
        if summary.activity_type.is_none() {
            return fail("Activity type is required.".into());
        }
        if summary.device_name.is_empty() {
            return fail("Device name is required.".into());
        }
        if summary.max_heart_rate_in_beats_per_minute <= 0.0 {
            return fail("Max heart rate must be a positive number.".into());
        }
        if summary.max_heart_rate_in_beats_per_minute > self.max_heart_rate {
            return fail(format!(
                "Max heart rate must be lower than {}.",
                self.max_heart_rate
            ));
        }
        if summary.duration_in_seconds <= 0.0 {
            return fail("Duration must be a positive number.".into());
        }
        Ok(())
    }
}
