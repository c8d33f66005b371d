//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Resolution never fails; invalid levels/directories are reported later
//!   by `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "AREACHECK_DB_PATH";
pub const LOG_DIR_ENV: &str = "AREACHECK_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "AREACHECK_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "areacheck.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "areacheck-logs";

/// Resolved storage and logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
            log_level: default_log_level().to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DB_PATH_ENV, LOG_LEVEL_ENV};
    use std::path::PathBuf;

    #[test]
    fn lookup_overrides_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            DB_PATH_ENV => Some(" /var/lib/areacheck/results.db ".to_string()),
            LOG_LEVEL_ENV => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, PathBuf::from("/var/lib/areacheck/results.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, AppConfig::default().log_dir);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
