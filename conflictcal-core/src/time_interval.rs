//! Half-open time-of-day intervals.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes in a day. Valid minute values lie in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A `[start, end)` range within a single day, in minutes since local midnight.
///
/// Always satisfies `start < end < MINUTES_PER_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeInterval {
    start: u16,
    end: u16,
}

impl TimeInterval {
    pub fn new(start: u16, end: u16) -> Result<Self, ValidationError> {
        for minutes in [start, end] {
            if minutes >= MINUTES_PER_DAY {
                return Err(ValidationError::TimeOutOfRange(minutes));
            }
        }
        if start >= end {
            return Err(ValidationError::EmptyInterval { start, end });
        }
        Ok(TimeInterval { start, end })
    }

    /// Build an interval from two `HH:MM` clock times.
    pub fn from_clock(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_clock_time(start)?, parse_clock_time(end)?)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    /// Strict overlap: intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        debug_assert!(self.start < self.end && other.start < other.end);
        self.start < other.end && other.start < self.end
    }

    /// The shared part of two intervals, if any.
    pub fn intersection(&self, other: &TimeInterval) -> Option<TimeInterval> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Anchor the interval on a concrete date.
    pub fn on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (
            date.and_time(minutes_to_time(self.start)),
            date.and_time(minutes_to_time(self.end)),
        )
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_clock_time(self.start),
            format_clock_time(self.end)
        )
    }
}

/// Deserialization goes through `new` so a decoded interval is always valid.
impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: u16,
            end: u16,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimeInterval::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

/// Parse `HH:MM` (24-hour clock) into minutes since midnight.
pub fn parse_clock_time(s: &str) -> Result<u16, ValidationError> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidClockTime(s.to_string()))?;
    Ok(time_to_minutes(time))
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_clock_time(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn time_to_minutes(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

fn minutes_to_time(minutes: u16) -> NaiveTime {
    // `minutes` is below MINUTES_PER_DAY, so this is always a valid time
    NaiveTime::from_num_seconds_from_midnight_opt(u32::from(minutes) * 60, 0)
        .unwrap_or(NaiveTime::MIN)
}
