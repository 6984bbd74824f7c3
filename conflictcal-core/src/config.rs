//! Global conflictcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ConflictCalError, ConflictCalResult};

static DEFAULT_COURSE_FILE: &str = "~/.conflictcal/courses.json";

/// Written on first run. Every option is commented out, so the built-in
/// defaults apply until the user edits it.
pub const DEFAULT_CONFIG: &str = r#"# conflictcal configuration
#
# Any key below can also be set through the environment, e.g.
# CONFLICTCAL_COURSE_FILE=~/spring.json

# Where your courses are stored:
# course_file = "~/.conflictcal/courses.json"
"#;

fn default_course_file() -> PathBuf {
    PathBuf::from(DEFAULT_COURSE_FILE)
}

/// Configuration at ~/.config/conflictcal/config.toml
///
/// Every key can be overridden with a `CONFLICTCAL_`-prefixed environment
/// variable, e.g. `CONFLICTCAL_COURSE_FILE`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConflictCalConfig {
    #[serde(default = "default_course_file")]
    pub course_file: PathBuf,
}

impl Default for ConflictCalConfig {
    fn default() -> Self {
        ConflictCalConfig {
            course_file: default_course_file(),
        }
    }
}

impl ConflictCalConfig {
    pub fn config_path() -> ConflictCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConflictCalError::Config("Could not determine config directory".into()))?
            .join("conflictcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> ConflictCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (optional) layered under environment overrides.
    pub fn load_from(path: &Path) -> ConflictCalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CONFLICTCAL"))
            .build()
            .map_err(|e| ConflictCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConflictCalError::Config(e.to_string()))
    }

    /// The course file path with `~` expanded.
    pub fn course_file_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.course_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the config to `path`.
    pub fn save(&self, path: &Path) -> ConflictCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConflictCalError::Config(e.to_string()))?;

        write_config(path, &content)
    }

    /// Write [`DEFAULT_CONFIG`] to `path`, creating its directory if needed.
    pub fn create_default_config(path: &Path) -> ConflictCalResult<()> {
        write_config(path, DEFAULT_CONFIG)
    }
}

fn write_config(path: &Path, contents: &str) -> ConflictCalResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConflictCalError::Config(format!("Could not create config directory: {e}"))
        })?;
    }

    std::fs::write(path, contents)
        .map_err(|e| ConflictCalError::Config(format!("Could not write config file: {e}")))
}
