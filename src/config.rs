//! Viewer configuration
//!
//! Optional `circadian.toml`, looked up next to the executable and then in
//! the working directory. Every field has a default, so the file may be
//! partial or absent.

use crate::data::TimeOverflow;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "circadian.toml";
/// Default data file name.
pub const DEFAULT_DATA_FILE: &str = "circadian.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Data file; relative paths resolve next to the executable.
    pub data_file: PathBuf,

    /// Handling of sample times at or past 1440 minutes.
    pub time_overflow: TimeOverflow,

    pub window: WindowConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            time_overflow: TimeOverflow::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Initial window size in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 700.0,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// First readable config from [`Self::default_paths`], else defaults.
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
            }
        }
        log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Self::default()
    }

    /// Config locations, most specific first.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = exe_dir() {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }
}

/// Directory holding the running executable.
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.data_file, PathBuf::from("circadian.json"));
        assert_eq!(config.time_overflow, TimeOverflow::Wrap);
        assert_eq!(config.window.width, 1100.0);
    }

    #[test]
    fn test_parse_partial() {
        let config = ViewerConfig::parse(
            r#"
            time_overflow = "reject"

            [window]
            height = 900.0
            "#,
        )
        .unwrap();
        assert_eq!(config.time_overflow, TimeOverflow::Reject);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.window.width, 1100.0);
        assert_eq!(config.window.height, 900.0);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ViewerConfig::parse("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_parse_bad_policy() {
        let result = ViewerConfig::parse(r#"time_overflow = "clamp""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ViewerConfig::load("/nonexistent/path/circadian.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_default_paths_not_empty() {
        let paths = ViewerConfig::default_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from(CONFIG_FILE_NAME)));
    }
}
