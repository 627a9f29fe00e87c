//! Command line arguments for phoenix-theme-check.
//!
//! Invoked with no arguments the tool validates the current directory.

use crate::version;
use clap::Parser;
use std::path::PathBuf;

/// Structural and brand-colour checks for the Phoenix SharePoint theme package
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "phoenix-theme-check",
    version,
    long_version = version::long_version(),
    about
)]
pub struct Args {
    /// Directory containing index.html, the theme script, and assets/
    #[arg(long, value_name = "DIR", default_value = ".", env = "PHOENIX_THEME_ROOT")]
    pub root: PathBuf,

    /// Disable coloured glyphs
    #[arg(long)]
    pub no_color: bool,

    /// Print the check catalogue and exit without validating
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
