pub mod add;
pub mod conflicts;
pub mod list;
pub mod remove;
pub mod update;
pub mod week;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use conflictcal_core::Schedule;
use conflictcal_core::config::ConflictCalConfig;
use conflictcal_core::store::{load_schedule, save_schedule};
use conflictcal_core::time_interval::parse_clock_time;

/// The course file the commands read and write.
pub struct CourseStore {
    path: PathBuf,
}

impl CourseStore {
    /// Use `file_override` if given, otherwise the configured course file.
    pub fn open(file_override: Option<PathBuf>) -> Result<Self> {
        let path = match file_override {
            Some(path) => path,
            None => ConflictCalConfig::load()?.course_file_path(),
        };

        tracing::debug!(path = %path.display(), "using course file");

        Ok(CourseStore { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Schedule> {
        load_schedule(&self.path)
            .with_context(|| format!("Could not load courses from {}", self.path.display()))
    }

    pub fn save(&self, schedule: &Schedule) -> Result<()> {
        save_schedule(&self.path, schedule)
            .with_context(|| format!("Could not save courses to {}", self.path.display()))
    }
}

/// Parse an optional `HH:MM` argument.
fn parse_time_arg(value: Option<&str>) -> Result<Option<u16>> {
    Ok(value.map(parse_clock_time).transpose()?)
}
