//! # Zipr Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the zipr application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ZiprError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains the tool touches:
//! - Filesystem access (missing inputs, unreadable files)
//! - Archive container reading and writing
//! - Argument validation
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(ZiprError::MissingInput { path: path.display().to_string() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let file = File::open(&path)
//!     .with_context(|| format!("Failed to open archive: {}", path.display()))?;
//! ```
//!
//! Per-item errors are logged and recorded in a `RunReport` rather than
//! propagated; only container-level failures unwind to `main`.
//!
use thiserror::Error;

/// Custom error type for the zipr application.
#[derive(Error, Debug)]
pub enum ZiprError {
    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Input path '{path}' does not exist.")]
    MissingInput { path: String },

    #[error("Archive '{path}' is not a recognized container (expected .zip or .tar).")]
    UnsupportedFormat { path: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
