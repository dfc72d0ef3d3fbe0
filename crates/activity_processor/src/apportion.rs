//! Assignment of heart-rate sample blocks to laps.
//!
//! Blocks are matched to laps purely by position in the heart-rate sample
//! sequence. Most activities record one block per lap. Indoor cycling records
//! two consecutive blocks per lap, so lap `i` owns blocks `2i` and `2i + 1`.
//!
//! ```
//! use activity_processor::apportion::heart_rate_samples_for_lap;
//! use activity_processor::{ActivityType, LapSampleLayout, Sample};
//!
//! let samples = vec![Sample::heart_rate("86,87"), Sample::heart_rate("96,97")];
//! let layout = LapSampleLayout::for_activity(ActivityType::IndoorCycling);
//! let lap = heart_rate_samples_for_lap(&samples, 0, layout);
//! let readings: Vec<i64> = lap.iter().map(|s| s.heart_rate).collect();
//! assert_eq!(readings, vec![86, 87, 96, 97]);
//! ```

use std::ops::Range;

use crate::types::{ActivityType, LapHeartRateSample, Sample};

/// How many consecutive sample blocks make up one lap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LapSampleLayout {
    OneBlockPerLap,
    TwoBlocksPerLap,
}

impl LapSampleLayout {
    /// Layout used by an activity type.
    ///
    /// Every new activity type must be placed here explicitly.
    pub fn for_activity(activity_type: ActivityType) -> Self {
        match activity_type {
            ActivityType::IndoorCycling => Self::TwoBlocksPerLap,
            ActivityType::Running
            | ActivityType::Cycling
            | ActivityType::Swimming
            | ActivityType::Walking
            | ActivityType::Generic
            | ActivityType::Unknown => Self::OneBlockPerLap,
        }
    }

    /// Layout for an optional activity type. A missing type is generic.
    pub fn for_optional(activity_type: Option<ActivityType>) -> Self {
        activity_type.map_or(Self::OneBlockPerLap, Self::for_activity)
    }

    pub fn blocks_per_lap(self) -> usize {
        match self {
            Self::OneBlockPerLap => 1,
            Self::TwoBlocksPerLap => 2,
        }
    }

    /// Positions in the heart-rate sample sequence owned by `lap_index`.
    pub fn block_range(self, lap_index: usize) -> Range<usize> {
        let n = self.blocks_per_lap();
        lap_index * n..lap_index * n + n
    }

    /// Fewest heart-rate blocks needed to cover `lap_count` laps.
    pub fn required_blocks(self, lap_count: usize) -> usize {
        lap_count * self.blocks_per_lap()
    }
}

/// Parse one comma separated token of sample data.
///
/// Surrounding whitespace is ignored and the leading, optionally signed run
/// of decimal digits is read; anything after it (`"7.5"`, `"86bpm"`) is
/// dropped. Returns `None` when no digit leads the token, including the empty
/// token, or when the digits do not fit an `i64`.
pub fn parse_reading(token: &str) -> Option<i64> {
    let token = token.trim();
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let sign = token.len() - unsigned.len();
    token[..sign + digits].parse().ok()
}

/// Readings of a single block in recorded order. Unparsable tokens read as 0.
pub fn block_readings(sample: &Sample) -> impl Iterator<Item = i64> + '_ {
    sample
        .data
        .split(',')
        .map(|token| parse_reading(token).unwrap_or(0))
}

/// Heart-rate readings belonging to lap `lap_index`.
///
/// `samples` must already be restricted to heart-rate blocks. Readings of the
/// lap's blocks are concatenated in block order and numbered from 0 within the
/// lap. Blocks past the end of `samples` are skipped, so a lap with no blocks
/// yields an empty list.
pub fn heart_rate_samples_for_lap(
    samples: &[Sample],
    lap_index: usize,
    layout: LapSampleLayout,
) -> Vec<LapHeartRateSample> {
    let range = layout.block_range(lap_index);
    samples
        .iter()
        .skip(range.start)
        .take(range.len())
        .flat_map(block_readings)
        .enumerate()
        .map(|(sample_index, heart_rate)| LapHeartRateSample {
            sample_index,
            heart_rate,
        })
        .collect()
}
