//! Common test helpers for the binary integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

pub fn encrypt_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_encrypt"))
}

pub fn password_validation_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_password-validation"))
}

/// Run a binary with `args`, keeping logging off so stderr stays quiet.
pub fn run(binary: PathBuf, args: &[&str]) -> Output {
    Command::new(&binary)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run {}: {}", binary.display(), e))
}

pub fn run_encrypt(args: &[&str]) -> Output {
    run(encrypt_binary(), args)
}

pub fn run_password_validation(args: &[&str]) -> Output {
    run(password_validation_binary(), args)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
