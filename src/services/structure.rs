use std::fs;
use std::path::PathBuf;

use crate::models::report::{DirectoryAction, DirectoryRecord};
use crate::models::template::PROJECT_DIRECTORIES;
use crate::utils::error::{Result, SetupError};

/// Ensures the `src` and `tests` directories exist inside the project
#[derive(Debug, Clone)]
pub struct StructureCreator {
    project_dir: PathBuf,
}

impl StructureCreator {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    pub fn ensure(&self) -> Result<Vec<DirectoryRecord>> {
        let mut records = Vec::with_capacity(PROJECT_DIRECTORIES.len());

        for (dir_name, label) in PROJECT_DIRECTORIES {
            let path = self.project_dir.join(dir_name);

            let action = if path.exists() {
                tracing::info!("{label} directory already exists at: {}", path.display());
                DirectoryAction::AlreadyExists
            } else {
                fs::create_dir_all(&path).map_err(|source| {
                    tracing::error!(
                        "Failed to create project directories in '{}': {source}",
                        self.project_dir.display()
                    );
                    SetupError::DirectoryError {
                        path: self.project_dir.clone(),
                        source,
                    }
                })?;
                tracing::info!("{label} directory created at: {}", path.display());
                DirectoryAction::Created
            };

            records.push(DirectoryRecord { path, action });
        }

        Ok(records)
    }
}
