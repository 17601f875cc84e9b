use std::process::Command;

/// First line of a command's stdout, or `None` if it is missing or fails.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Export `key` to the crate: an explicit env var wins, then `fallback`.
fn export(key: &str, fallback: impl FnOnce() -> Option<String>) {
    let value = std::env::var(key)
        .ok()
        .or_else(fallback)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env={}={}", key, value);
}

fn main() {
    export("GIT_SHA", || {
        command_output("git", &["rev-parse", "--short", "HEAD"])
    });
    export("BUILD_DATE", || command_output("date", &["+%Y-%m-%d"]));
}
