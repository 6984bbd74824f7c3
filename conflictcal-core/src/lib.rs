//! Core types for conflictcal.
//!
//! This crate provides the course model and the conflict engine used by the CLI:
//! - `Course`, `TimeInterval` and `Weekday` for recurring weekly courses
//! - `conflict` for pairwise overlap detection and the conflict set
//! - `calendar` for projecting courses onto a concrete week
//! - `Schedule` and `store` for the user's course collection

pub mod calendar;
pub mod config;
pub mod conflict;
pub mod course;
pub mod error;
pub mod schedule;
pub mod store;
pub mod time_interval;
pub mod weekday;

pub use calendar::{CalendarEvent, project, week_dates, week_start};
pub use conflict::{Conflict, ConflictSet, compute_conflicts, conflicts};
pub use course::{Course, CourseId, CourseRecord, CourseUpdate, NewCourse};
pub use error::{ConflictCalError, ConflictCalResult, ValidationError};
pub use schedule::Schedule;
pub use time_interval::TimeInterval;
pub use weekday::Weekday;
