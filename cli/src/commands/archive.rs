//! # Zipr Archive Command (`commands::archive`)
//!
//! File: cli/src/commands/archive.rs
//!
//! ## Overview
//!
//! Implements the archive-building half of the tool: given a destination
//! container name and an ordered list of input paths, produce one zip
//! container holding every regular file reachable from those paths.
//!
//! ## Workflow
//!
//! 1. Create (truncating) the destination container — failure here is
//!    fatal to the run.
//! 2. For each input path, in caller order:
//!    - missing on disk → error log + `MissingInput`, continue;
//!    - regular file → one entry stored under the literal input path;
//!    - directory → recursive walk, every file stored under its
//!      parent-relative name; unreadable files are logged and skipped
//!      while the rest of the directory is still added.
//! 3. Finish the container (central directory written, file closed).
//!
//! Zero successful entries still produce a valid, empty container. The
//! whole operation is wrapped in the timing helper, and every input path
//! lands in the returned `RunReport`.
//!
use crate::common::archive::entry;
use crate::common::archive::zip::ZipBuilder;
use crate::common::time;
use crate::core::error::{Result, ZiprError};
use crate::core::report::{ItemOutcome, RunReport};
use std::path::Path;
use tracing::{debug, error, info};

/// # Handle Archive Command (`handle_archive`)
///
/// Entry point for an ARCHIVE run. Builds the container named `name` from
/// `paths` and returns the per-item report.
///
/// ## Arguments
///
/// * `name` - Destination container name, already normalized to carry the
///   `.zip` suffix.
/// * `paths` - Input paths in caller-supplied order; not deduplicated.
///
/// ## Returns
///
/// * `Result<RunReport>` - One `ItemReport` per input path plus the count
///   of entries written. Per-item failures are recorded, not propagated.
///
/// ## Errors
///
/// Returns an `Err` only for container-level failures: creating the
/// destination file or finalizing the archive.
pub fn handle_archive(name: &str, paths: &[String]) -> Result<RunReport> {
    time::timed("archive", || build_archive(name, paths))
}

fn build_archive(name: &str, paths: &[String]) -> Result<RunReport> {
    info!("creating archive [{}]", name);
    let mut builder = ZipBuilder::create(Path::new(name))?;
    let mut report = RunReport::new();

    for raw in paths {
        debug!("adding path [{}]", raw);
        let path = Path::new(raw);

        if !path.exists() {
            // Reported, non-fatal: the run still attempts every other input.
            error!("{}", ZiprError::MissingInput { path: raw.clone() });
            report.record(raw.as_str(), ItemOutcome::MissingInput);
            continue;
        }

        let outcome = if path.is_dir() {
            append_directory(&mut builder, path, &mut report.entries_added)
        } else {
            append_file(&mut builder, path, &mut report.entries_added)
        };
        report.record(raw.as_str(), outcome);
        debug!("added path [{}]", raw);
    }

    builder.finish()?;
    info!("closed archive [{}]", name);
    Ok(report)
}

/// Adds a plain-file input as a single entry stored under its literal path.
fn append_file(builder: &mut ZipBuilder, path: &Path, added: &mut usize) -> ItemOutcome {
    match builder.append(&entry::file_entry(path)) {
        Ok(()) => {
            *added += 1;
            ItemOutcome::Ok
        }
        Err(e) => {
            error!("failed to add [{}] to archive: {:#}", path.display(), e);
            ItemOutcome::IoError
        }
    }
}

/// Adds every regular file beneath a directory input. Files that fail to
/// append are logged and skipped; the directory's remaining files are
/// still added, and the input is reported as an I/O failure.
fn append_directory(builder: &mut ZipBuilder, dir: &Path, added: &mut usize) -> ItemOutcome {
    let mut failures = 0usize;

    for item in entry::walk_directory(dir) {
        match builder.append(&item) {
            Ok(()) => *added += 1,
            Err(e) => {
                error!(
                    "failed to add [{}] to archive: {:#}",
                    item.source.display(),
                    e
                );
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ItemOutcome::Ok
    } else {
        ItemOutcome::IoError
    }
}
