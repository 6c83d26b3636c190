use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::models::report::{FileAction, FileRecord};
use crate::models::template::{FileTemplate, PROJECT_TEMPLATES};
use crate::services::prompt::Prompter;
use crate::utils::error::{Result, SetupError};

/// Writes the static project templates, asking before replacing a file
#[derive(Debug, Clone)]
pub struct TemplateWriter {
    project_dir: PathBuf,
}

impl TemplateWriter {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// Write the manifest and the ignore file, in that order
    pub fn write_all<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Vec<FileRecord>> {
        PROJECT_TEMPLATES
            .iter()
            .map(|template| self.write(template, &mut *prompter))
            .collect()
    }

    /// Write one template unless the user refuses to overwrite an existing file
    pub fn write<R: BufRead, W: Write>(
        &self,
        template: &FileTemplate,
        prompter: &mut Prompter<R, W>,
    ) -> Result<FileRecord> {
        let path = template.target_path(&self.project_dir);

        let action = if path.exists() {
            if confirm_overwrite(&path, prompter)? {
                FileAction::Overwritten
            } else {
                tracing::info!(
                    "User chose not to overwrite the existing file: {}",
                    path.display()
                );
                return Ok(FileRecord {
                    path,
                    action: FileAction::Kept,
                });
            }
        } else {
            FileAction::Written
        };

        fs::write(&path, template.content).map_err(|source| SetupError::WriteError {
            path: path.clone(),
            source,
        })?;
        tracing::info!("{} created.", template.label);

        Ok(FileRecord { path, action })
    }
}

fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<bool> {
    prompter.confirm(&format!(
        "A file at {} already exists. Do you want to overwrite it? (yes/no): ",
        path.display()
    ))
}
