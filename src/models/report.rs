use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the folder manager did with the project folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderStatus {
    /// Folder did not exist and was created
    Created,
    /// Folder existed and the user agreed to reuse it
    Reused,
    /// Folder existed and the user declined to reuse it
    Declined,
    /// Folder did not exist and could not be created
    CreationFailed { reason: String },
}

impl FolderStatus {
    /// Whether setup may continue inside the folder
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Created | Self::Reused)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    /// File was absent and has been written
    Written,
    /// File existed and the user agreed to overwrite it
    Overwritten,
    /// File existed and was left untouched
    Kept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryAction {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub action: FileAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub path: PathBuf,
    pub action: DirectoryAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// Summary of one scaffolding run, printed with `--json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub status: Outcome,
    pub project_name: String,
    pub project_path: PathBuf,
    pub interpreter_version: String,
    pub folder: FolderStatus,
    pub files: Vec<FileRecord>,
    pub directories: Vec<DirectoryRecord>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl ScaffoldReport {
    pub fn is_completed(&self) -> bool {
        self.status == Outcome::Completed
    }

    /// Action recorded for the file with the given name, if it was considered
    pub fn file_action(&self, file_name: &str) -> Option<FileAction> {
        self.files
            .iter()
            .find(|record| record.path.file_name().is_some_and(|name| name == file_name))
            .map(|record| record.action)
    }
}
