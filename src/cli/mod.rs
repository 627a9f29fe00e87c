//! CLI module for argument parsing and console output.

pub mod args;
pub mod output;
