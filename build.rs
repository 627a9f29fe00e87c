//! Build script for phoenix-theme-check.
//!
//! Captures git and build metadata for `--version`.

use std::env;
use std::process::Command;

fn main() {
    // Tell cargo to re-run this script if it changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Set the target triple for version info
    println!(
        "cargo:rustc-env=TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    // Get git commit hash
    if let Some(hash) = command_output("git", &["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=PHOENIX_CHECK_GIT_HASH={}", hash);
    }

    // Get build date in ISO 8601 format
    if let Some(date) = command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) {
        println!("cargo:rustc-env=PHOENIX_CHECK_BUILD_DATE={}", date);
    }
}

/// Run a command and return its trimmed stdout if it succeeded
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            } else {
                None
            }
        })
}
