//! Validation check catalogue.
//!
//! The catalogue is a fixed, ordered list of sections:
//! - Required files: existence of every file the theme package ships
//! - HTML structure: structural markers and branding in `index.html`
//! - Brand colours in HTML: exact colour literals in `index.html`
//! - PowerShell theme definitions: variant names and accents in the installer
//!
//! Sections carry no state. They are evaluated by
//! [`Runner`](crate::engine::runner::Runner) in the order returned by
//! [`all_sections`], and the console output follows the same order.

pub mod brand;
pub mod files;
pub mod markup;
pub mod theme;

use std::borrow::Cow;
use std::fmt;

/// What a section's assertions are evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Each target is a path, relative to the package root, that must exist
    Filesystem,
    /// Each target is a literal that must appear in this file's text
    File(&'static str),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Filesystem => write!(f, "filesystem"),
            Subject::File(path) => write!(f, "{}", path),
        }
    }
}

/// A single labelled check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    /// Human-readable label printed next to the glyph
    pub label: Cow<'static, str>,
    /// Path or literal, depending on the section's [`Subject`]
    pub target: &'static str,
}

impl Assertion {
    pub fn new(label: impl Into<Cow<'static, str>>, target: &'static str) -> Self {
        Assertion {
            label: label.into(),
            target,
        }
    }
}

/// A named group of assertions reported under one header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub subject: Subject,
    pub assertions: Vec<Assertion>,
}

/// Get every section in execution order
pub fn all_sections() -> Vec<Section> {
    vec![
        files::required_files_section(),
        markup::structure_section(),
        markup::brand_colours_section(),
        theme::theme_definitions_section(),
    ]
}
