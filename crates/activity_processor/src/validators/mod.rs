//! Record validators.
//!
//! Each record kind has its own rule set behind the [`Validator`] trait so
//! rules can be tested in isolation and swapped in the pipeline.

mod activity_data;
mod laps;
mod samples;
mod summary;

pub use activity_data::ActivityDataValidator;
pub use laps::LapsValidator;
pub use samples::SamplesValidator;
pub use summary::{DEFAULT_MAX_HEART_RATE, SummaryValidator};

use crate::error::ValidationResult;

/// Checks a record of type `T`.
pub trait Validator<T: ?Sized> {
    /// Returns the first rule `data` violates, or `Ok(())`.
    fn validate(&self, data: &T) -> ValidationResult<()>;
}
