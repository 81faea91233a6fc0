//! # Zipr Commands Module (`commands`)
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module organizes the two operation handlers the CLI dispatches
//! to. The handlers are mutually exclusive per invocation: `main`
//! resolves the mode once and calls exactly one of them.
//!
//! ## Command Groups
//!
//! - `archive`: builds one zip container from the input paths
//! - `extract`: unpacks existing zip/tar containers into the current
//!   working directory
//!
//! Each handler takes the already-validated arguments and returns a
//! `RunReport` with one outcome per input path.
//!

/// Archive-building command: inputs → one zip container.
pub mod archive;
/// Extraction command: containers → current working directory.
pub mod extract;
