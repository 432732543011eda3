//! Runtime configuration for diary processes.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`READINGDIARY_LOG_LEVEL`, `READINGDIARY_LOG_DIR`)
//! 2. Defaults (`default_log_level()`, logging disabled without a directory)

use crate::logging::{default_log_level, init_logging, normalize_level};
use std::path::PathBuf;

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "READINGDIARY_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "READINGDIARY_LOG_DIR";

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Normalized level (`trace|debug|info|warn|error`).
    pub level: &'static str,
    /// Absolute log directory. `None` leaves logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Resolves settings from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps variable names to values.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let level = match read(ENV_LOG_LEVEL) {
            Some(value) => normalize_level(value.as_str())
                .map_err(|err| format!("{ENV_LOG_LEVEL}: {err}"))?,
            None => default_log_level(),
        };
        let log_dir = read(ENV_LOG_DIR).map(|value| PathBuf::from(value.trim()));

        Ok(Self { level, log_dir })
    }

    /// Starts logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn apply(&self) -> Result<bool, String> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", log_dir.display()))?;
        init_logging(self.level, log_dir)?;
        Ok(true)
    }
}
