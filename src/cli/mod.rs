// CLI module for command-line interface

use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::level_filters::LevelFilter;

use crate::models::report::ScaffoldReport;
use crate::services::interpreter::DEFAULT_INTERPRETER;
use crate::services::prompt::DEFAULT_RETRY_LIMIT;
use crate::services::scaffolder::Scaffolder;
use crate::utils::config::{parse_log_level, Settings};
use crate::utils::error::{Result, SetupError};

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "pysetup")]
#[command(about = "Scaffold a new Python project folder")]
#[command(long_about = r#"Scaffold a new Python project folder interactively.

Checks that a Python interpreter is available, asks for a project name,
then creates (or reuses) a folder of that name containing:
  • Pipfile       dependency manifest template
  • .gitignore    standard Python ignore list
  • src/          source directory
  • tests/        test directory

Existing files are only replaced after you confirm.

Examples:
  pysetup                               Ask for everything interactively
  pysetup --name my_project             Skip the name prompt
  pysetup --python python3.12           Check a specific interpreter
  pysetup --json                        Print a JSON report when done"#)]
#[command(version)]
pub struct Cli {
    /// Project folder name (prompted for when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Python interpreter to check for
    #[arg(long = "python", env = "PYSETUP_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: OsString,

    /// Attempts allowed for each yes/no question
    #[arg(
        long,
        env = "PYSETUP_RETRIES",
        default_value_t = DEFAULT_RETRY_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub retries: u32,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, env = "PYSETUP_LOG_LEVEL", default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,

    /// Print a JSON report on stdout (prompts move to stderr)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolve the parsed arguments against the current directory
    pub fn settings(&self) -> Result<Settings> {
        let base_dir = std::env::current_dir()?;

        Ok(Settings {
            interpreter: self.interpreter.clone(),
            retry_limit: self.retries,
            log_level: self.log_level,
            json: self.json,
            project_name: self.name.clone(),
            base_dir,
        })
    }
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Run the scaffolder against the process's stdin/stdout
    pub fn execute(settings: &Settings) -> Result<ScaffoldReport> {
        settings.validate()?;

        let prompt_output: Box<dyn Write> = if settings.json {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };

        let mut scaffolder = Scaffolder::new(settings, io::stdin().lock(), prompt_output);
        let report = scaffolder.run()?;

        if settings.json {
            let json_output = serde_json::to_string_pretty(&report)
                .map_err(|e| SetupError::ConfigError(format!("JSON serialization error: {e}")))?;
            println!("{json_output}");
        }

        Ok(report)
    }
}
