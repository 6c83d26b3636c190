use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::models::project_name::ProjectName;
use crate::models::report::FolderStatus;
use crate::services::prompt::Prompter;
use crate::utils::error::Result;

/// Creates the project folder, or asks whether an existing one may be reused
#[derive(Debug, Clone)]
pub struct FolderManager {
    base_dir: PathBuf,
}

impl FolderManager {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Path the project folder lives at
    pub fn project_dir(&self, name: &ProjectName) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Make the folder for `name` available.
    ///
    /// Errors only come from the prompt; a failed `create_dir_all` is
    /// reported as `FolderStatus::CreationFailed` so the caller can stop
    /// gracefully.
    pub fn prepare<R: BufRead, W: Write>(
        &self,
        name: &ProjectName,
        prompter: &mut Prompter<R, W>,
    ) -> Result<FolderStatus> {
        let folder = self.project_dir(name);

        if folder.exists() {
            let use_existing = prompter.confirm(&format!(
                "The folder '{name}' already exists. Do you want to use this existing folder? (yes/no): "
            ))?;

            if use_existing {
                tracing::info!("Using the existing folder: {name}");
                Ok(FolderStatus::Reused)
            } else {
                tracing::info!("User chose not to use the existing folder.");
                Ok(FolderStatus::Declined)
            }
        } else {
            Ok(create_folder(&folder, name))
        }
    }
}

fn create_folder(folder: &Path, name: &ProjectName) -> FolderStatus {
    match fs::create_dir_all(folder) {
        Ok(()) => {
            tracing::info!("Folder '{name}' created.");
            FolderStatus::Created
        }
        Err(e) => {
            tracing::error!("Failed to create the folder '{name}': {e}");
            FolderStatus::CreationFailed {
                reason: e.to_string(),
            }
        }
    }
}
