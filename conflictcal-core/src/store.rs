//! JSON course file.
//!
//! The file holds an array of course records:
//! `[{"id", "name", "startTime", "endTime", "days"}, ...]`.

use std::path::Path;

use crate::course::{Course, CourseRecord};
use crate::error::{ConflictCalError, ConflictCalResult};
use crate::schedule::Schedule;

/// Load a schedule from `path`. A missing file is an empty schedule.
pub fn load_schedule(path: &Path) -> ConflictCalResult<Schedule> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "course file missing, starting empty");
        return Ok(Schedule::new());
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<CourseRecord> = serde_json::from_str(&content).map_err(|e| {
        ConflictCalError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    let courses = records
        .into_iter()
        .map(Course::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(path = %path.display(), courses = courses.len(), "loaded courses");

    Schedule::from_courses(courses)
}

/// Write `schedule` to `path`, creating parent directories as needed.
pub fn save_schedule(path: &Path, schedule: &Schedule) -> ConflictCalResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let records: Vec<CourseRecord> = schedule.courses().iter().map(Course::to_record).collect();
    let content = serde_json::to_string_pretty(&records)
        .map_err(|e| ConflictCalError::Serialization(e.to_string()))?;
    std::fs::write(path, content)?;

    tracing::debug!(path = %path.display(), courses = records.len(), "saved courses");

    Ok(())
}
