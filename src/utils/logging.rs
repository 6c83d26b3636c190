// Logging setup

use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives that override the level
pub const LOG_ENV_VAR: &str = "PYSETUP_LOG";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Build the subscriber for one run.
///
/// Nothing is installed globally: the caller scopes the returned dispatch
/// around the work with `tracing::dispatcher::with_default`.
pub fn build_dispatch(level: LevelFilter) -> Dispatch {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();

    Dispatch::new(subscriber)
}
