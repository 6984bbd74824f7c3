//! Error types for conflictcal.

use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a course request is rejected before a `Course` is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Course name must not be empty")]
    EmptyName,

    #[error("Course id must not be empty")]
    EmptyId,

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidClockTime(String),

    #[error("Time {0} is out of range (minutes since midnight must be below 1440)")]
    TimeOutOfRange(u16),

    #[error("Start time {start} must be before end time {end}")]
    EmptyInterval { start: u16, end: u16 },

    #[error("Course must meet on at least one day")]
    NoDays,

    #[error("Unknown day '{0}'. Expected one of Monday..Sunday")]
    UnknownDay(String),

    #[error("A course named '{0}' already exists")]
    DuplicateName(String),
}

/// Errors that can occur in conflictcal operations.
#[derive(Error, Debug)]
pub enum ConflictCalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Duplicate course id in schedule: {0}")]
    DuplicateId(String),

    #[error("The week containing {0} falls outside the supported date range")]
    WeekOutOfRange(NaiveDate),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for conflictcal operations.
pub type ConflictCalResult<T> = Result<T, ConflictCalError>;
