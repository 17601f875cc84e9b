//! Plumbing shared by the `encrypt` and `password-validation` binaries:
//! logging setup, version strings, shell completions and error reporting.

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::process::ExitCode;

/// Version text shown by `--version`, including build metadata.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

/// Exit status for success
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for user input errors and failed validation
pub const EXIT_USER_ERROR: u8 = 1;
/// Exit status for unexpected runtime errors (e.g. stdout closed)
pub const EXIT_RUNTIME_ERROR: u8 = 2;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One plain line per message
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Initialize logging (env_logger picks up the RUST_LOG environment variable).
///
/// Logs go to stderr so they never mix with command output.
pub fn setup_logging() {
    env_logger::init();
}

/// Write a completion script for the command `C` to stdout.
pub fn print_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Turn the outcome of a command into the process exit status.
///
/// Errors are printed to stderr with a red `Error:` prefix.
pub fn finish(result: anyhow::Result<u8>) -> ExitCode {
    ExitCode::from(exit_status(result))
}

fn exit_status(result: anyhow::Result<u8>) -> u8 {
    match result {
        Ok(status) => status,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("{} {:#}", "Error:".red(), e);
            EXIT_RUNTIME_ERROR
        }
    }
}
