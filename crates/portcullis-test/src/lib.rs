//! Regression tests for the `portcullis` CLI.
//!
//! Exercises the binary as a subprocess to catch regressions in flag
//! names, exit codes, and output formats.

#[cfg(test)]
pub mod cli;
