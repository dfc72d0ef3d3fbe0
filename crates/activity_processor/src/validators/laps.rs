use super::Validator;
use crate::error::{ValidationError, ValidationResult};
use crate::types::Lap;

/// Structural checks on a lap list.
#[derive(Clone, Copy, Debug, Default)]
pub struct LapsValidator;

impl Validator<[Lap]> for LapsValidator {
    fn validate(&self, laps: &[Lap]) -> ValidationResult<()> {
        if laps.is_empty() {
            return Err(ValidationError::Lap("No laps provided.".into()));
        }

        for (index, lap) in laps.iter().enumerate() {
            let number = index + 1;
            if lap.start_time_in_seconds.is_none_or(|t| t < 0.0) {
                return Err(ValidationError::Lap(format!(
                    "Lap {number} has an invalid start time."
                )));
            }
            if lap.total_distance_in_meters <= 0.0 {
                return Err(ValidationError::Lap(format!(
                    "Lap {number} has invalid distance."
                )));
            }
            if lap.timer_duration_in_seconds <= 0.0 {
                return Err(ValidationError::Lap(format!(
                    "Lap {number} has invalid duration."
                )));
            }
        }
        Ok(())
    }
}
