use super::Validator;
use crate::apportion::parse_reading;
use crate::error::{ValidationError, ValidationResult};
use crate::types::Sample;

/// Checks heart-rate sample blocks. Other sample types are not inspected.
#[derive(Clone, Copy, Debug, Default)]
pub struct SamplesValidator;

impl Validator<[Sample]> for SamplesValidator {
    fn validate(&self, samples: &[Sample]) -> ValidationResult<()> {
        if samples.is_empty() {
            return Err(ValidationError::Sample("No samples provided.".into()));
        }

        // Numbering counts heart-rate blocks only.
        for (index, sample) in samples.iter().filter(|s| s.is_heart_rate()).enumerate() {
            if sample.data.is_empty() {
                return Err(ValidationError::Sample(format!(
                    "Sample {} has no data.",
                    index + 1
                )));
            }
            if let Some(token) = sample
                .data
                .split(',')
                .find(|token| parse_reading(token).is_none())
            {
                return Err(ValidationError::Sample(format!(
                    "Invalid number '{token}' in data."
                )));
            }
        }
        Ok(())
    }
}
