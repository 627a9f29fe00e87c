//! phoenix-theme-check CLI entry point
//!
//! Validates the Phoenix SharePoint theme package in the working directory.

use clap::Parser;
use phoenix_theme_check::checks::all_sections;
use phoenix_theme_check::cli::args::Args;
use phoenix_theme_check::cli::output::{format_catalogue, Reporter};
use phoenix_theme_check::logging::init_tracing;
use phoenix_theme_check::{run_validation, ValidateConfig, EXIT_FATAL};

use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list {
        print!("{}", format_catalogue(&all_sections()));
        return ExitCode::SUCCESS;
    }

    let config = ValidateConfig::from_args(&args);
    let mut reporter = Reporter::stdio(config.color);

    match run_validation(&config, &mut reporter) {
        Ok(result) => ExitCode::from(result.exit_status()),
        Err(e) => {
            debug!(error = %e, "validation aborted");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
