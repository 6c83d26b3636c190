use chrono::Local;
use std::io::{BufRead, Write};

use crate::models::project_name::ProjectName;
use crate::models::report::{Outcome, ScaffoldReport};
use crate::services::folder_manager::FolderManager;
use crate::services::interpreter::InterpreterProbe;
use crate::services::prompt::Prompter;
use crate::services::structure::StructureCreator;
use crate::services::template_writer::TemplateWriter;
use crate::utils::config::Settings;
use crate::utils::error::Result;

const NAME_PROMPT: &str = "Enter the name of your python project: ";

/// Runs the whole setup: interpreter check, name, folder, templates, layout
#[derive(Debug)]
pub struct Scaffolder<R, W> {
    probe: InterpreterProbe,
    folders: FolderManager,
    prompter: Prompter<R, W>,
    preset_name: Option<String>,
}

impl<R: BufRead, W: Write> Scaffolder<R, W> {
    /// Build a scaffolder whose questions are read from `input` and shown on `output`
    pub fn new(settings: &Settings, input: R, output: W) -> Self {
        Self {
            probe: InterpreterProbe::new(&settings.interpreter),
            folders: FolderManager::new(&settings.base_dir),
            prompter: Prompter::with_retry_limit(input, output, settings.retry_limit),
            preset_name: settings.project_name.clone(),
        }
    }

    /// Execute every step in order, stopping at the first fatal error.
    ///
    /// A declined or failed folder step is not an error: the report comes
    /// back with `Outcome::Cancelled` and nothing else is touched.
    pub fn run(&mut self) -> Result<ScaffoldReport> {
        let started_at = Local::now();
        let interpreter = self.probe.check()?;

        let raw_name = match &self.preset_name {
            Some(name) => name.trim().to_string(),
            None => self.prompter.ask(NAME_PROMPT)?,
        };
        let name = ProjectName::parse(&raw_name)?;

        let folder = self.folders.prepare(&name, &mut self.prompter)?;
        let project_dir = self.folders.project_dir(&name);

        let mut report = ScaffoldReport {
            status: Outcome::Cancelled,
            project_name: name.to_string(),
            project_path: project_dir.clone(),
            interpreter_version: interpreter.version,
            folder,
            files: Vec::new(),
            directories: Vec::new(),
            started_at,
            finished_at: started_at,
        };

        if !report.folder.is_usable() {
            tracing::info!("Setup was cancelled by the user.");
            report.finished_at = Local::now();
            return Ok(report);
        }

        tracing::info!("Setup will proceed using the folder: {name}");

        report.files = TemplateWriter::new(&project_dir).write_all(&mut self.prompter)?;
        report.directories = StructureCreator::new(&project_dir).ensure()?;
        report.status = Outcome::Completed;
        report.finished_at = Local::now();

        Ok(report)
    }

    /// Give back the prompt streams, mostly useful to inspect what was shown
    pub fn into_streams(self) -> (R, W) {
        self.prompter.into_parts()
    }
}
