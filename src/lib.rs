// check_prometheus library - public API

// Re-export error types
pub mod error;
pub use error::{CheckError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use core::config::CheckConfig;
pub use core::plugin::{
    format_output, format_value, CheckOutcome, Evaluator, PerformanceDataCollection, State, States, Threshold,
};

use clap::error::ErrorKind;
use std::ffi::OsString;

/// Initialize logging. Output goes to stderr so stdout only carries the plugin line.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Run a check from command-line arguments and return its verdict.
///
/// Usage errors are reported as UNKNOWN, like any other failure. Help and
/// version text is only printed by the binary; asking for it here runs no
/// check and also yields UNKNOWN.
pub fn check<I, T>(args: I) -> CheckOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match cli::build_cli().try_get_matches_from(args) {
        Ok(matches) => commands::execute(&matches),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            CheckOutcome::unknown(
                "Error when executing cli action : help and version are only available from the command line",
            )
        }
        Err(e) => cli_error_outcome(&e),
    }
}

/// First line of a clap error as an UNKNOWN outcome
pub fn cli_error_outcome(err: &clap::Error) -> CheckOutcome {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    let reason = first_line.strip_prefix("error: ").unwrap_or(first_line);
    CheckOutcome::unknown(format!("Error when executing cli action : {}", reason))
}
