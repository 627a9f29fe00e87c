//! Theme installer script checks (section 4).

use super::brand::{PHOENIX_GOLD, PHOENIX_RED, THEME_DARK, THEME_GOLD, THEME_LIGHT};
use super::{Assertion, Section, Subject};

/// PowerShell installer that registers the SharePoint themes
pub const THEME_SCRIPT_PATH: &str = "Phoenix-SharePoint-Theme.ps1";

/// Build the theme definitions section.
///
/// The script must name all three variants and reuse the accent colours
/// from the preview page.
pub fn theme_definitions_section() -> Section {
    Section {
        title: "PowerShell theme definitions",
        subject: Subject::File(THEME_SCRIPT_PATH),
        assertions: vec![
            Assertion::new("Dark theme defined", THEME_DARK),
            Assertion::new("Gold theme defined", THEME_GOLD),
            Assertion::new("Light theme defined", THEME_LIGHT),
            Assertion::new("PS1 uses Phoenix Red", PHOENIX_RED),
            Assertion::new("PS1 uses Phoenix Gold", PHOENIX_GOLD),
        ],
    }
}
