//! # Zipr Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared utility modules used by the zipr CLI. Centralizing these under
//! the `common::` namespace keeps a clear separation between
//! command-specific logic (`commands::`) and core infrastructure
//! (`core::`).
//!
//! ## Architecture
//!
//! - **`archive`**: Entry-name derivation, zip container writing/reading,
//!   tar container reading. Includes the `entry`, `zip`, and `tar`
//!   submodules.
//! - **`time`**: Elapsed-time formatting and the timed-run wrapper used
//!   around whole operations.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, time};
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! time::timed("archive", || {
//!     let mut builder = archive::zip::ZipBuilder::create(Path::new("out.zip"))?;
//!     builder.finish()
//! })?;
//! # Ok(())
//! # }
//! ```
//!

/// Archive container handling: entry naming, zip write/read, tar read.
pub mod archive;
/// Operation timing helpers.
pub mod time;
