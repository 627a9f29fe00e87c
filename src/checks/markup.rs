//! Preview page checks (sections 2 and 3).
//!
//! Plain case-sensitive substring containment over `index.html`. No
//! tokenizer is involved, so `<HTML lang="en">` does not count as the
//! language declaration.

use super::brand::{BRAND_KEYWORD, DEEP_BLACK, PHOENIX_GOLD, PHOENIX_RED};
use super::{Assertion, Section, Subject};

/// Preview page under test
pub const MARKUP_PATH: &str = "index.html";

/// Build the HTML structure section
pub fn structure_section() -> Section {
    Section {
        title: "HTML structure",
        subject: Subject::File(MARKUP_PATH),
        assertions: vec![
            Assertion::new("Has DOCTYPE", "<!DOCTYPE html>"),
            Assertion::new("Has html lang attribute", "<html lang=\"en\">"),
            Assertion::new("Has charset meta", "<meta charset"),
            Assertion::new("Has viewport meta", "name=\"viewport\""),
            Assertion::new("Has header element", "</header>"),
            Assertion::new("Has main element", "</main>"),
            Assertion::new("Has footer element", "</footer>"),
            Assertion::new("Contains Phoenix branding", BRAND_KEYWORD),
        ],
    }
}

/// Build the brand colours section
pub fn brand_colours_section() -> Section {
    Section {
        title: "Brand colours in HTML",
        subject: Subject::File(MARKUP_PATH),
        assertions: vec![
            Assertion::new(format!("Phoenix Red ({}) present", PHOENIX_RED), PHOENIX_RED),
            Assertion::new(format!("Phoenix Gold ({}) present", PHOENIX_GOLD), PHOENIX_GOLD),
            Assertion::new(format!("Deep Black ({}) present", DEEP_BLACK), DEEP_BLACK),
        ],
    }
}
