//! Time Label Module
//! Converts minute offsets into 12-hour clock labels ("hh:mm AM/PM").

use crate::data::Dataset;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A formatted clock label for one sample.
pub type DisplayLabel = String;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Invalid time {0}: minutes since midnight cannot be negative")]
    Negative(i64),
    #[error("Invalid time {0}: must be below {max} minutes", max = MINUTES_PER_DAY)]
    OutOfRange(i64),
}

/// What to do with offsets that run past the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOverflow {
    /// Treat the offset as a time on a later day (modulo 1440).
    #[default]
    Wrap,
    /// Refuse offsets of 1440 or more.
    Reject,
}

impl TimeOverflow {
    /// Bring `minutes` into `0..1440` according to the policy.
    pub fn normalize(self, minutes: i64) -> Result<i64, LabelError> {
        if minutes < 0 {
            return Err(LabelError::Negative(minutes));
        }
        if minutes < MINUTES_PER_DAY {
            return Ok(minutes);
        }
        match self {
            TimeOverflow::Wrap => Ok(minutes % MINUTES_PER_DAY),
            TimeOverflow::Reject => Err(LabelError::OutOfRange(minutes)),
        }
    }
}

/// Format minutes since midnight as a 12-hour clock string.
///
/// Only `0..1440` is accepted; use [`TimeOverflow::normalize`] first for
/// anything else.
pub fn format_12h(minutes: i64) -> Result<DisplayLabel, LabelError> {
    if minutes < 0 {
        return Err(LabelError::Negative(minutes));
    }
    let time = u32::try_from(minutes)
        .ok()
        .and_then(|m| NaiveTime::from_hms_opt(m / 60, m % 60, 0))
        .ok_or(LabelError::OutOfRange(minutes))?;
    Ok(time.format("%I:%M %p").to_string())
}

/// One label per sample, in dataset order.
pub fn derive_labels(
    dataset: &Dataset,
    overflow: TimeOverflow,
) -> Result<Vec<DisplayLabel>, LabelError> {
    let mut wrapped = 0usize;
    let labels = dataset
        .samples()
        .iter()
        .map(|sample| {
            let minutes = overflow.normalize(sample.time)?;
            if minutes != sample.time {
                wrapped += 1;
            }
            format_12h(minutes)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if wrapped > 0 {
        log::warn!(
            "{} sample time(s) past midnight were wrapped onto the clock",
            wrapped
        );
    }

    Ok(labels)
}
