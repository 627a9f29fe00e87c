//! Version and build information.

use std::fmt;
use std::sync::OnceLock;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;

        if let Some(commit) = self.commit {
            write!(f, "\nCommit: {}", commit)?;
        }

        if let Some(date) = self.build_date {
            write!(f, "\nBuilt: {}", date)?;
        }

        write!(f, "\nTarget: {}", self.target)
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("PHOENIX_CHECK_GIT_HASH"),
        build_date: option_env!("PHOENIX_CHECK_BUILD_DATE"),
        target: env!("TARGET"),
    }
}

/// Multi-line version text for `--version`
pub fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| get_build_info().to_string())
}
