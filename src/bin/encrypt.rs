//! `encrypt` entry point: Caesar-shift one argument by three places.

use anyhow::{Context, Result};
use clap::Parser;
use clap_complete::Shell;
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

use caesar_guard::cipher::{encrypt, DEFAULT_SHIFT};
use caesar_guard::cli::{self, EXIT_SUCCESS, EXIT_USER_ERROR};

#[derive(Parser)]
#[command(name = "encrypt")]
#[command(version, long_version = cli::LONG_VERSION)]
#[command(about = "Shift every letter of TEXT three places along the alphabet", long_about = None)]
struct Cli {
    /// Text to encrypt (case and non-letters are preserved)
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,

    /// Further arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,

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

    let Some(text) = args.text else {
        writeln!(stdout, "Missing input text").context("Failed to write to stdout")?;
        return Ok(EXIT_USER_ERROR);
    };

    if !args.rest.is_empty() {
        debug!("Ignoring {} extra argument(s)", args.rest.len());
    }

    debug!(
        "Encrypting {} character(s) with shift {}",
        text.chars().count(),
        DEFAULT_SHIFT
    );
    writeln!(stdout, "{}", encrypt(&text, DEFAULT_SHIFT)).context("Failed to write to stdout")?;

    Ok(EXIT_SUCCESS)
}
