//! Validation engine module.
//!
//! Provides section execution and result accounting.

pub mod result;
pub mod runner;
