//! Courses and the requests that create or change them.
//!
//! A `Course` can only be obtained by validating a request (or a persisted
//! record), so every course the rest of the crate sees already satisfies its
//! invariants: a non-empty id and name, a non-empty interval, and at least one
//! day.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time_interval::TimeInterval;
use crate::weekday::Weekday;

/// Opaque course identifier.
pub type CourseId = String;

/// A recurring weekly course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord", into = "CourseRecord")]
pub struct Course {
    id: CourseId,
    name: String,
    interval: TimeInterval,
    days: BTreeSet<Weekday>,
}

/// Persisted/wire shape of a course.
///
/// Times are minutes since midnight; days are canonical day names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: CourseId,
    pub name: String,
    pub start_time: u16,
    pub end_time: u16,
    pub days: Vec<String>,
}

/// Request to create a course. `id` is assigned by the schedule when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,
    pub name: String,
    pub start_time: u16,
    pub end_time: u16,
    pub days: Vec<String>,
}

/// Partial replacement of a course's fields. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub start_time: Option<u16>,
    pub end_time: Option<u16>,
    pub days: Option<Vec<String>>,
}

impl Course {
    /// Validate a creation request under the given id.
    pub fn create(id: impl Into<CourseId>, request: NewCourse) -> Result<Self, ValidationError> {
        Self::validate(
            id.into(),
            &request.name,
            request.start_time,
            request.end_time,
            &request.days,
        )
    }

    /// Build the course that results from applying `update`.
    ///
    /// The merged fields are validated as a whole; on error `self` is untouched.
    pub fn apply(&self, update: &CourseUpdate) -> Result<Self, ValidationError> {
        let days: Vec<String> = match &update.days {
            Some(days) => days.clone(),
            None => self.days.iter().map(|d| d.name().to_string()).collect(),
        };

        Self::validate(
            self.id.clone(),
            update.name.as_deref().unwrap_or(&self.name),
            update.start_time.unwrap_or(self.interval.start()),
            update.end_time.unwrap_or(self.interval.end()),
            &days,
        )
    }

    fn validate(
        id: CourseId,
        name: &str,
        start_time: u16,
        end_time: u16,
        days: &[String],
    ) -> Result<Self, ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let interval = TimeInterval::new(start_time, end_time)?;

        let days = days
            .iter()
            .map(|d| d.parse::<Weekday>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        if days.is_empty() {
            return Err(ValidationError::NoDays);
        }

        Ok(Course {
            id,
            name: name.to_string(),
            interval,
            days,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }

    /// Days the course meets on, Sunday-first.
    pub fn days(&self) -> &BTreeSet<Weekday> {
        &self.days
    }

    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Days both courses meet on, Sunday-first.
    pub fn shared_days(&self, other: &Course) -> Vec<Weekday> {
        self.days.intersection(&other.days).copied().collect()
    }

    /// Case- and whitespace-insensitive name comparison used for duplicate checks.
    pub fn has_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }

    pub fn to_record(&self) -> CourseRecord {
        self.clone().into()
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self.days.iter().map(|d| d.short_name()).collect();
        write!(f, "{} ({} {})", self.name, days.join("/"), self.interval)
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = ValidationError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        Course::validate(
            record.id,
            &record.name,
            record.start_time,
            record.end_time,
            &record.days,
        )
    }
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        CourseRecord {
            id: course.id,
            name: course.name,
            start_time: course.interval.start(),
            end_time: course.interval.end(),
            days: course.days.iter().map(|d| d.name().to_string()).collect(),
        }
    }
}
