//! Configuration loading
//!
//! Small TOML-backed configuration: the root directory name, confirmation
//! behavior for destructive operations, and the logging table. An explicit
//! `--config` path wins; otherwise `arbor.toml` in the working directory is
//! used when present, else defaults.

use crate::error::AppError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "arbor.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the tree's root directory.
    #[serde(default = "default_root_name")]
    pub root_name: String,

    /// Ask for confirmation before deletions and before create-on-navigate.
    /// Scripted runs ignore this and answer yes.
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    /// Directory listing output: "text" or "json".
    #[serde(default = "default_listing_format")]
    pub listing_format: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_listing_format() -> String {
    "text".to_string()
}

fn default_root_name() -> String {
    "root".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            confirm_destructive: default_true(),
            listing_format: default_listing_format(),
            logging: LoggingConfig::default(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, with an optional explicit file path.
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(AppConfig::default())
                }
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<AppConfig, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            AppError::Config(format!("Invalid config {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.root_name, "root");
        assert!(config.confirm_destructive);
        assert_eq!(config.listing_format, "text");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_partial_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "root_name = \"home\"").unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"debug\"").unwrap();
        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.root_name, "home");
        assert!(config.confirm_destructive);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, "file");
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "root_name = [unclosed").unwrap();
        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let result = ConfigLoader::load(Some(Path::new("/nonexistent/arbor.toml")));
        assert!(result.is_err());
    }
}
