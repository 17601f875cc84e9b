//! `password-validation` entry point: report every password rule one
//! argument breaks.

use anyhow::{Context, Result};
use clap::Parser;
use clap_complete::Shell;
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

use caesar_guard::cli::{self, OutputFormat, EXIT_SUCCESS, EXIT_USER_ERROR};
use caesar_guard::password::{validate, PasswordPolicy};

#[derive(Parser)]
#[command(name = "password-validation")]
#[command(version, long_version = cli::LONG_VERSION)]
#[command(
    about = "Check a password against the length, uppercase and symbol rules",
    long_about = None
)]
#[command(
    after_help = "EXIT STATUS:\n    0    Password satisfies every rule\n    1    Password missing or at least one rule failed\n    2    Unexpected error"
)]
struct Cli {
    /// Password to check
    #[arg(allow_hyphen_values = true)]
    password: Option<String>,

    /// Further arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> ExitCode {
    cli::setup_logging();
    let args = Cli::parse();
    cli::finish(run(args))
}

fn run(args: Cli) -> Result<u8> {
    if let Some(shell) = args.completions {
        cli::print_completions::<Cli>(shell);
        return Ok(EXIT_SUCCESS);
    }

    let mut stdout = io::stdout().lock();

    let Some(password) = args.password else {
        writeln!(stdout, "No password provided.").context("Failed to write to stdout")?;
        return Ok(EXIT_USER_ERROR);
    };

    if !args.rest.is_empty() {
        debug!("Ignoring {} extra argument(s)", args.rest.len());
    }

    // Never log the password itself
    debug!(
        "Validating password of {} character(s) as {:?}",
        password.chars().count(),
        args.format
    );

    let valid = match args.format {
        OutputFormat::Text => {
            let messages = validate(&password);
            for message in &messages {
                writeln!(stdout, "{}", message).context("Failed to write to stdout")?;
            }
            messages.is_empty()
        }
        OutputFormat::Json => {
            let report = PasswordPolicy::default().report(&password);
            let json =
                serde_json::to_string(&report).context("Failed to serialize validation report")?;
            writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
            report.valid
        }
    };

    debug!("Password valid: {}", valid);

    Ok(if valid { EXIT_SUCCESS } else { EXIT_USER_ERROR })
}
