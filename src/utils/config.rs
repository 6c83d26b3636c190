// Run configuration

use std::ffi::OsString;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::services::interpreter::DEFAULT_INTERPRETER;
use crate::services::prompt::DEFAULT_RETRY_LIMIT;
use crate::utils::error::{Result, SetupError};

/// Effective settings for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interpreter invoked for the presence check
    pub interpreter: OsString,
    /// Attempts allowed for each yes/no question
    pub retry_limit: u32,
    /// Log level used when `PYSETUP_LOG` is not set
    pub log_level: LevelFilter,
    /// Print the run report as JSON on stdout
    pub json: bool,
    /// Project name given up front instead of prompting for it
    pub project_name: Option<String>,
    /// Directory the project folder is created in
    pub base_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interpreter: OsString::from(DEFAULT_INTERPRETER),
            retry_limit: DEFAULT_RETRY_LIMIT,
            log_level: LevelFilter::INFO,
            json: false,
            project_name: None,
            base_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Check values that the CLI parser cannot enforce on its own
    pub fn validate(&self) -> Result<()> {
        if self.retry_limit == 0 {
            return Err(SetupError::ConfigError(
                "retry limit must be at least 1".to_string(),
            ));
        }

        if self.interpreter.is_empty() {
            return Err(SetupError::ConfigError(
                "interpreter command cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a log level name such as "info" or "debug"
pub fn parse_log_level(value: &str) -> std::result::Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level '{value}' (expected off, error, warn, info, debug or trace)"))
}
