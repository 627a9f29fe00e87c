//! Required file checks (section 1).
//!
//! Existence only. A missing file is a counted failure, never a fatal error.

use super::{Assertion, Section, Subject};
use crate::checks::markup::MARKUP_PATH;
use crate::checks::theme::THEME_SCRIPT_PATH;

/// Transparent logo asset
pub const TRANSPARENT_LOGO_PATH: &str = "assets/Phoenix_Transparent.png";

/// Logo on black background asset
pub const BLACK_LOGO_PATH: &str = "assets/Phoenix_Black_Background.jpg";

/// Package readme
pub const README_PATH: &str = "README.md";

/// Relative paths that must exist, in reporting order
pub const REQUIRED_FILES: [&str; 5] = [
    MARKUP_PATH,
    THEME_SCRIPT_PATH,
    TRANSPARENT_LOGO_PATH,
    BLACK_LOGO_PATH,
    README_PATH,
];

/// Build the required-files section
pub fn required_files_section() -> Section {
    Section {
        title: "Required files",
        subject: Subject::Filesystem,
        assertions: REQUIRED_FILES
            .iter()
            .map(|path| Assertion::new(format!("{} exists", path), path))
            .collect(),
    }
}
