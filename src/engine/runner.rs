//! Section execution.
//!
//! The runner walks sections in order and evaluates every assertion
//! eagerly. A failed assertion never skips the ones after it. Text subjects
//! are read once per run and shared between sections; a read failure is the
//! only thing that stops a run early.

use crate::checks::{Section, Subject};
use crate::cli::output::Reporter;
use crate::ValidateError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whole-file text cache keyed by package-relative path
#[derive(Debug, Default)]
struct SourceCache {
    texts: HashMap<&'static str, String>,
}

impl SourceCache {
    /// Read `relative` under `root`, or return the copy read earlier
    fn load(&mut self, root: &Path, relative: &'static str) -> Result<&str, ValidateError> {
        match self.texts.entry(relative) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                let path = root.join(relative);
                debug!(path = %path.display(), "reading subject file");
                let text = fs::read_to_string(&path)
                    .map_err(|source| ValidateError::Read { path, source })?;
                Ok(entry.insert(text).as_str())
            }
        }
    }

    fn len(&self) -> usize {
        self.texts.len()
    }
}

/// Evaluates sections against a theme package directory
#[derive(Debug)]
pub struct Runner {
    root: PathBuf,
    sources: SourceCache,
}

impl Runner {
    /// Create a runner rooted at the theme package directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Runner {
            root: root.into(),
            sources: SourceCache::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of distinct text files read so far
    pub fn files_read(&self) -> usize {
        self.sources.len()
    }

    /// Run every section in order, reporting each assertion.
    ///
    /// The section header is written before the subject file is read, so a
    /// fatal read leaves the header as the last line of section output.
    pub fn run<O: Write, E: Write>(
        &mut self,
        sections: &[Section],
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), ValidateError> {
        for (index, section) in sections.iter().enumerate() {
            // Header goes out first, even if the subject read below fails
            reporter.section(index + 1, section.title)?;

            // Text subjects are loaded once and reused by later sections
            let text = match section.subject {
                Subject::Filesystem => None,
                Subject::File(relative) => Some(self.sources.load(&self.root, relative)?),
            };

            let failed_before = reporter.result().failed;
            // Evaluate every assertion; a failure never skips the rest
            for assertion in &section.assertions {
                let condition = match text {
                    None => self.root.join(assertion.target).exists(),
                    Some(text) => text.contains(assertion.target),
                };
                reporter.check(condition, &assertion.label)?;
            }

            debug!(
                section = section.title,
                subject = %section.subject,
                failed = reporter.result().failed - failed_before,
                "section complete"
            );
        }

        Ok(())
    }
}
