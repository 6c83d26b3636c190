use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::utils::error::{Result, SetupError};

/// Word characters, hyphens and spaces; `\w` is Unicode-aware
const FOLDER_NAME_PATTERN: &str = r"^[\w\- ]+$";

fn folder_name_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(FOLDER_NAME_PATTERN).expect("folder name pattern is valid"))
}

/// A project folder name that has passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` and wrap it.
    ///
    /// Accepts only non-empty strings made of letters, digits, `_`, `-` and
    /// spaces. Anything else is a `ValidationError`.
    pub fn parse(name: &str) -> Result<Self> {
        if folder_name_regex().is_match(name) {
            tracing::info!("'{name}' is a valid folder name.");
            Ok(Self(name.to_string()))
        } else {
            tracing::error!(
                "'{name}' is not a valid folder name. Folder names must only contain alphanumeric characters, hyphens, and spaces."
            );
            Err(SetupError::ValidationError(format!(
                "'{name}' is not a valid folder name"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = SetupError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}
