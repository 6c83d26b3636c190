// pysetup - Python project scaffolder
// Main CLI entry point

use clap::Parser;
use std::process;
use pysetup::cli::{Cli, CliDispatcher};
use pysetup::utils::error::UserError;
use pysetup::utils::logging::build_dispatch;

fn main() {
    let cli = Cli::parse();
    let dispatch = build_dispatch(cli.log_level);

    let result = tracing::dispatcher::with_default(&dispatch, || {
        cli.settings()
            .and_then(|settings| CliDispatcher::execute(&settings))
    });

    if let Err(err) = result {
        let user_error = UserError::from_setup_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
