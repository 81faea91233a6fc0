//! # Zipr Integration Test Helpers (`tests::common`)
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration test files in this directory.
//!

// Allow potentially unused code in this common module, as different test
// files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files.
pub use assert_cmd::Command;

/// # Get Zipr Command (`zipr_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `zipr` binary target for the current test run.
///
/// ## Panics
/// Panics if the `zipr` binary cannot be found via `Command::cargo_bin`.
pub fn zipr_cmd() -> Command {
    Command::cargo_bin("zipr").expect("Failed to find zipr binary for testing")
}
