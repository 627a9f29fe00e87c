//! phoenix-theme-check library
//!
//! Structural checks for the Phoenix SharePoint theme package: the HTML
//! preview page, the PowerShell theme installer, and the logo assets.
//!
//! The library provides:
//! - A fixed catalogue of assertions grouped into sections ([`checks`])
//! - A runner that evaluates every assertion in order ([`engine`])
//! - A console reporter that owns the pass/fail tally ([`cli::output`])
//!
//! # Example
//!
//! ```no_run
//! use phoenix_theme_check::cli::output::Reporter;
//! use phoenix_theme_check::{run_validation, ValidateConfig};
//!
//! let config = ValidateConfig::default();
//! let mut reporter = Reporter::stdio(config.color);
//! let result = run_validation(&config, &mut reporter).expect("theme files unreadable");
//! std::process::exit(i32::from(result.exit_status()));
//! ```

pub mod checks;
pub mod cli;
pub mod engine;
pub mod logging;
pub mod version;

use cli::args::Args;
use cli::output::Reporter;
use engine::result::RunResult;
use engine::runner::Runner;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Exit status for a run that could not complete
pub const EXIT_FATAL: u8 = 3;

/// Errors that abort a validation run.
///
/// A failed assertion is not an error; it is counted in [`RunResult`].
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A text subject could not be read as UTF-8
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The console could not be written
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateConfig {
    /// Directory holding the theme package
    pub root: PathBuf,
    /// Colour glyphs and summary
    pub color: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        ValidateConfig {
            root: PathBuf::from("."),
            color: true,
        }
    }
}

impl ValidateConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        ValidateConfig {
            root: args.root.clone(),
            color: !args.no_color,
        }
    }
}

/// Run the full check catalogue against `config.root`.
///
/// Every assertion is reported through `reporter`, followed by the summary
/// line. Returns the final tally, or a [`ValidateError`] if a text subject
/// could not be read, in which case no summary is written.
pub fn run_validation<O: Write, E: Write>(
    config: &ValidateConfig,
    reporter: &mut Reporter<O, E>,
) -> Result<RunResult, ValidateError> {
    let mut runner = Runner::new(&config.root);

    // A fatal read returns here, before any summary line is written
    runner.run(&checks::all_sections(), reporter)?;

    let result = reporter.summarize()?;
    info!(
        root = %runner.root().display(),
        files_read = runner.files_read(),
        total = result.total(),
        passed = result.passed,
        failed = result.failed,
        "validation finished"
    );
    Ok(result)
}
