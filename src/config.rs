//! Application settings
//!
//! Settings come from an optional JSON file. The dataset path can also be
//! supplied on the command line or through `SKILL_ROADMAP_DATASET`; the
//! flag wins, then the environment, then the file, then the default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the dataset path
pub const DATASET_ENV: &str = "SKILL_ROADMAP_DATASET";

/// Dataset file used when nothing else is configured
pub const DEFAULT_DATASET: &str = "data/student_performance_extended.csv";

/// Settings read from the optional JSON file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the reference dataset CSV
    pub dataset_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(settings)
    }

    /// Pick the dataset path by precedence: flag, environment, file, default.
    pub fn resolve_dataset(&self, flag: Option<&Path>, env_value: Option<&str>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
            return PathBuf::from(value);
        }
        self.dataset_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
    }
}
