//! Console reporting for phoenix-theme-check.
//!
//! Pass lines and section headers go to the first sink (stdout), fail lines
//! and the failure summary to the second (stderr). The reporter owns the
//! [`RunResult`], so every fail line written is exactly one counted failure.
//!
//! Colour is applied to glyphs and the summary only. With colour off the
//! output is plain text; the `NO_COLOR` environment variable is honoured
//! through `colored` as well.

use crate::checks::Section;
use crate::engine::result::RunResult;
use crate::ValidateError;
use colored::Colorize;
use std::io::{self, Stderr, Stdout, Write};

const PASS_GLYPH: &str = "✓";
const FAIL_GLYPH: &str = "✗";

/// Writes per-assertion lines and keeps the tally
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
    result: RunResult,
}

impl Reporter<Stdout, Stderr> {
    /// Reporter bound to the process's standard streams
    pub fn stdio(color: bool) -> Self {
        Reporter::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Reporter {
            out,
            err,
            color,
            result: RunResult::new(),
        }
    }

    /// Tally so far
    pub fn result(&self) -> RunResult {
        self.result
    }

    /// Split the reporter back into its sinks and final tally
    pub fn into_parts(self) -> (O, E, RunResult) {
        (self.out, self.err, self.result)
    }

    /// Write a section header, preceded by a blank line
    pub fn section(&mut self, number: usize, title: &str) -> Result<(), ValidateError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}. {}", number, title)?;
        Ok(())
    }

    pub fn report_pass(&mut self, message: &str) -> Result<(), ValidateError> {
        let glyph = if self.color {
            PASS_GLYPH.green().to_string()
        } else {
            PASS_GLYPH.to_string()
        };
        writeln!(self.out, "  {} {}", glyph, message)?;
        self.result.record_pass();
        Ok(())
    }

    /// Write a fail line and count exactly one failure
    pub fn report_fail(&mut self, message: &str) -> Result<(), ValidateError> {
        let glyph = if self.color {
            FAIL_GLYPH.red().to_string()
        } else {
            FAIL_GLYPH.to_string()
        };
        writeln!(self.err, "  {} {}", glyph, message)?;

        // Count only after the line is written so the tally matches stderr
        self.result.record_fail();
        Ok(())
    }

    /// Report `message` as passed or failed depending on `condition`
    pub fn check(&mut self, condition: bool, message: &str) -> Result<(), ValidateError> {
        if condition {
            self.report_pass(message)
        } else {
            self.report_fail(message)
        }
    }

    /// Write the closing summary line and flush both sinks
    pub fn summarize(&mut self) -> Result<RunResult, ValidateError> {
        // Blank separator always goes to stdout, even on failure
        writeln!(self.out)?;

        if self.result.is_success() {
            let line = "All checks passed.";
            let line = if self.color {
                line.green().to_string()
            } else {
                line.to_string()
            };
            writeln!(self.out, "{}\n", line)?;
        } else {
            let line = format!("{} check(s) failed.", self.result.failed);
            let line = if self.color {
                line.red().to_string()
            } else {
                line
            };
            writeln!(self.err, "{}\n", line)?;
        }

        // Flush before the caller turns the tally into an exit code
        self.out.flush()?;
        self.err.flush()?;
        Ok(self.result)
    }
}

/// Render the check catalogue without evaluating anything
pub fn format_catalogue(sections: &[Section]) -> String {
    let mut output = String::new();

    for (index, section) in sections.iter().enumerate() {
        output.push_str(&format!("{}. {} [{}]\n", index + 1, section.title, section.subject));
        for assertion in &section.assertions {
            output.push_str(&format!("  - {}\n", assertion.label));
        }
        output.push('\n');
    }

    output
}
