//! Input records and the processed report.
//!
//! Wire names follow the device export: camelCase for summaries and laps,
//! kebab-case for sample blocks.

use serde::de::IntoDeserializer;
use serde::de::value::StringDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

/// Sport recorded by the device.
///
/// Tags this crate does not know about deserialize to [`ActivityType::Unknown`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Running,
    Cycling,
    IndoorCycling,
    Swimming,
    Walking,
    Generic,
    #[serde(other)]
    Unknown,
}

/// Kind of sensor stream carried by a [`Sample`] block.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleType {
    HeartRate,
    Speed,
    Cadence,
    Power,
    Altitude,
    #[serde(other)]
    Unknown,
}

/// One summary per activity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    #[serde(default)]
    pub user_id: String,
    #[serde(default, deserialize_with = "deserialize_activity_type")]
    pub activity_type: Option<ActivityType>,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub max_heart_rate_in_beats_per_minute: f64,
    #[serde(default)]
    pub duration_in_seconds: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_in_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_offset_in_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heart_rate_in_beats_per_minute: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_kilocalories: Option<f64>,
}

/// An empty tag counts as no activity type at all.
fn deserialize_activity_type<'de, D>(deserializer: D) -> Result<Option<ActivityType>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(tag) if tag.is_empty() => Ok(None),
        Some(tag) => {
            let tag: StringDeserializer<D::Error> = tag.into_deserializer();
            ActivityType::deserialize(tag).map(Some)
        }
    }
}

impl ActivitySummary {
    /// Summary with the fields the pipeline reads; pass-through fields unset.
    pub fn new(
        user_id: impl Into<String>,
        activity_type: ActivityType,
        device_name: impl Into<String>,
        max_heart_rate_in_beats_per_minute: f64,
        duration_in_seconds: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            activity_type: Some(activity_type),
            device_name: device_name.into(),
            max_heart_rate_in_beats_per_minute,
            duration_in_seconds,
            activity_id: None,
            activity_name: None,
            start_time_in_seconds: None,
            start_time_offset_in_seconds: None,
            average_heart_rate_in_beats_per_minute: None,
            active_kilocalories: None,
        }
    }
}

/// A completed lap. Position in the lap list is the lap index.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
    #[serde(default)]
    pub start_time_in_seconds: Option<f64>,
    #[serde(default)]
    pub total_distance_in_meters: f64,
    #[serde(default)]
    pub timer_duration_in_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_temperature_celsius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
}

impl Lap {
    pub fn new(
        start_time_in_seconds: f64,
        total_distance_in_meters: f64,
        timer_duration_in_seconds: f64,
    ) -> Self {
        Self {
            start_time_in_seconds: Some(start_time_in_seconds),
            total_distance_in_meters,
            timer_duration_in_seconds,
            air_temperature_celsius: None,
            heart_rate: None,
        }
    }
}

/// A block of sensor readings. Position in the sample list, not any
/// timestamp, decides which lap the block belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Sample {
    #[serde(default)]
    pub recording_rate: f64,
    pub sample_type: SampleType,
    /// Comma separated integer readings.
    #[serde(default)]
    pub data: String,
}

impl Sample {
    pub fn new(recording_rate: f64, sample_type: SampleType, data: impl Into<String>) -> Self {
        Self {
            recording_rate,
            sample_type,
            data: data.into(),
        }
    }

    pub fn heart_rate(data: impl Into<String>) -> Self {
        Self::new(5.0, SampleType::HeartRate, data)
    }

    pub fn is_heart_rate(&self) -> bool {
        self.sample_type == SampleType::HeartRate
    }
}

/// The three loaded records, borrowed for cross-record validation.
#[derive(Clone, Copy, Debug)]
pub struct ActivityData<'a> {
    pub summary: &'a ActivitySummary,
    pub laps: &'a [Lap],
    pub samples: &'a [Sample],
}

/// Flattened projection of the summary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOverview {
    pub user_id: String,
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
    pub device: String,
    pub max_heart_rate: f64,
    pub duration: f64,
}

impl From<&ActivitySummary> for ActivityOverview {
    fn from(summary: &ActivitySummary) -> Self {
        Self {
            user_id: summary.user_id.clone(),
            activity_type: summary.activity_type,
            device: summary.device_name.clone(),
            max_heart_rate: summary.max_heart_rate_in_beats_per_minute,
            duration: summary.duration_in_seconds,
        }
    }
}

/// One heart-rate reading assigned to a lap.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LapHeartRateSample {
    /// Position of the reading within its lap.
    pub sample_index: usize,
    pub heart_rate: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LapData {
    pub start_time: Option<f64>,
    pub distance: f64,
    pub duration: f64,
    pub heart_rate_samples: Vec<LapHeartRateSample>,
}

/// Report produced by [`DataProcessor::process`](crate::DataProcessor::process).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedOutput {
    pub activity_overview: ActivityOverview,
    pub laps_data: Vec<LapData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_projects_summary_fields() {
        let summary = ActivitySummary::new("u1", ActivityType::Running, "Watch", 185.0, 3600.0);
        let overview = ActivityOverview::from(&summary);
        assert_eq!(overview.user_id, "u1");
        assert_eq!(overview.activity_type, Some(ActivityType::Running));
        assert_eq!(overview.device, "Watch");
        assert_eq!(overview.max_heart_rate, 185.0);
        assert_eq!(overview.duration, 3600.0);
    }

    #[test]
    fn heart_rate_constructor_tags_sample() {
        assert!(Sample::heart_rate("80").is_heart_rate());
        assert!(!Sample::new(1.0, SampleType::Power, "80").is_heart_rate());
    }
}
