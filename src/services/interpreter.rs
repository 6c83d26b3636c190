use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::process::Command;

use crate::utils::error::{Result, SetupError};

/// Interpreter probed when none is configured
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Information about the Python interpreter that answered the probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    /// Command that was run
    pub command: OsString,
    /// Version line as printed by the interpreter, e.g. "Python 3.11.4"
    pub version: String,
}

impl InterpreterInfo {
    /// Version without the leading "Python " label
    pub fn version_number(&self) -> &str {
        self.version.strip_prefix("Python ").unwrap_or(&self.version)
    }
}

/// Checks that a Python interpreter can be executed
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    command: OsString,
}

impl Default for InterpreterProbe {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl InterpreterProbe {
    pub fn new(command: impl AsRef<OsStr>) -> Self {
        Self {
            command: command.as_ref().to_os_string(),
        }
    }

    pub fn command(&self) -> &OsStr {
        &self.command
    }

    /// Run `<interpreter> --version` and report what it printed
    pub fn check(&self) -> Result<InterpreterInfo> {
        let output = match Command::new(&self.command).arg("--version").output() {
            Ok(output) => output,
            Err(err) => {
                tracing::error!("Python interpreter is not installed.");
                let reason = if err.kind() == ErrorKind::NotFound {
                    "not found".to_string()
                } else {
                    err.to_string()
                };
                return Err(SetupError::EnvironmentError(format!(
                    "Python interpreter '{}' could not be run: {reason}",
                    self.command.to_string_lossy()
                )));
            }
        };

        if !output.status.success() {
            tracing::error!("Python interpreter is not installed.");
            return Err(SetupError::EnvironmentError(format!(
                "Python interpreter '{}' exited with {}",
                self.command.to_string_lossy(),
                output.status
            )));
        }

        // Python 2 and early 3.x print the version on stderr
        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).trim().to_string()
        } else {
            stdout.trim().to_string()
        };

        tracing::info!("Python interpreter is installed: {version}");
        Ok(InterpreterInfo {
            command: self.command.clone(),
            version,
        })
    }
}
