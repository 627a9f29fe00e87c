//! Result accounting.
//!
//! The failure count equals the number of failed assertions, and the exit
//! status is non-zero exactly when that count is non-zero.

/// Exit status when every assertion passed
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when one or more assertions failed
pub const EXIT_FAILURES: u8 = 1;

/// Tally of one validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub passed: u32,
    pub failed: u32,
}

impl RunResult {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one passing assertion
    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    /// Record one failing assertion
    pub fn record_fail(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    /// True when no assertion failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this tally
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURES
        }
    }
}
