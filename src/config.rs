//! Configuration file support for course-planner.
//!
//! Provides YAML-based configuration through `course-planner.config.yml`
//! files, plus the settings resolution that merges command-line flags,
//! config values, and built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "course-planner.config.yml";

const DEFAULT_COURSES_PATH: &str = "courses.txt";
const DEFAULT_DELIMITER: &str = ",";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub courses_path: Option<String>,
    pub delimiter: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref delimiter) = config.delimiter {
        if delimiter.is_empty() {
            bail!(
                "Invalid config: delimiter must not be empty.\n\n\
                 💡 Hint: Use a field separator such as \",\" or \";\"."
            );
        }
    }
    if let Some(ref courses_path) = config.courses_path {
        if courses_path.trim().is_empty() {
            bail!(
                "Invalid config: courses_path must not be empty.\n\n\
                 💡 Hint: Point courses_path at your courses file, e.g. \"courses.txt\"."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective session settings after merging every source.
///
/// Precedence: command-line flag, then config file value, then the
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    pub courses_path: PathBuf,
    pub delimiter: String,
}

impl PlannerSettings {
    pub fn resolve(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Some(load_config_from_path(Path::new(path))?),
            None => discover_config(Path::new("."))?,
        }
        .unwrap_or_default();

        Self::merge(args, config)
    }

    fn merge(args: &Args, config: ConfigFile) -> Result<Self> {
        let courses_path = args
            .path
            .clone()
            .or(config.courses_path)
            .unwrap_or_else(|| DEFAULT_COURSES_PATH.to_string());

        let delimiter = args
            .delimiter
            .clone()
            .or(config.delimiter)
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());

        if delimiter.is_empty() {
            bail!("Invalid configuration: delimiter must not be empty");
        }

        Ok(Self {
            courses_path: PathBuf::from(courses_path),
            delimiter,
        })
    }
}
