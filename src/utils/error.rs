// Common error types for pysetup

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment error: {0}")]
    EnvironmentError(String),

    #[error("Too many invalid inputs ({attempts} attempts)")]
    RetriesExhausted { attempts: u32 },

    #[error("Standard input closed before an answer was given")]
    InputClosed,

    #[error("Failed to create project directories in '{}': {source}", .path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;

/// Error as shown to the person at the terminal, with the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Translate a crate error into its user-facing form
    pub fn from_setup_error(err: &SetupError) -> Self {
        let hint = match err {
            SetupError::ValidationError(_) => Some(
                "Folder names may only contain letters, digits, underscores, hyphens and spaces."
                    .to_string(),
            ),
            SetupError::EnvironmentError(_) => Some(
                "Install Python 3 or point --python (PYSETUP_PYTHON) at an interpreter."
                    .to_string(),
            ),
            SetupError::RetriesExhausted { .. } => {
                Some("Answer with 'yes', 'y', 'no' or 'n'.".to_string())
            }
            _ => None,
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code: 1,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
