use thiserror::Error;

use crate::validators::DEFAULT_MAX_HEART_RATE;

/// Environment variable overriding the max heart rate ceiling.
pub const MAX_HEART_RATE_ENV: &str = "ACTIVITY_PROCESSOR_MAX_HEART_RATE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessorConfig {
    /// Highest max heart rate a summary may report.
    pub max_heart_rate_ceiling: f64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_heart_rate_ceiling: DEFAULT_MAX_HEART_RATE,
        }
    }
}

impl ProcessorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get` instead of the process
    /// environment, so tests need not touch global state.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let max_heart_rate_ceiling = match get(MAX_HEART_RATE_ENV) {
            None => DEFAULT_MAX_HEART_RATE,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => v,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: MAX_HEART_RATE_ENV,
                        value: raw,
                    });
                }
            },
        };
        Ok(Self {
            max_heart_rate_ceiling,
        })
    }
}
