//! # Zipr Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module serves as the main interface and organizational unit for
//! archive-related utilities: deriving stable entry names from input
//! paths, writing zip containers, and reading zip and tar containers.
//!
//! ## Architecture
//!
//! The module contains specialized submodules per concern:
//!
//! - **`entry`**: Entry-name derivation and recursive directory walking
//!   (the path-resolver half of the archive builder).
//! - **`zip`**: Zip container writing (streamed, entry-by-entry) and
//!   extraction.
//! - **`tar`**: Tar container extraction, including gzip/xz/zstd
//!   compressed variants.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{entry, tar, zip};
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let mut builder = zip::ZipBuilder::create(Path::new("out.zip"))?;
//! for item in entry::walk_directory(Path::new("src")) {
//!     builder.append(&item)?;
//! }
//! builder.finish()?;
//!
//! tar::extract_tar(Path::new("vendor.tar.gz"), Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!

pub mod entry;
pub mod tar;
pub mod zip;
