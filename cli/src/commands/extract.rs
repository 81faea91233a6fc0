//! # Zipr Extract Command (`commands::extract`)
//!
//! File: cli/src/commands/extract.rs
//!
//! ## Overview
//!
//! Implements the extraction half of the tool: given one or more existing
//! container paths, unpack each into the current working directory,
//! dispatching on the container format declared by the file name.
//!
//! ## Workflow
//!
//! For each path, in caller order, the name is checked for a recognized
//! substring (deliberately a substring probe, mirroring the dispatch the
//! tool has always used — not a strict suffix check):
//!
//! - contains `.zip` → unpack as a zip container;
//! - else contains `.tar` → unpack as a tar container, with the
//!   compressed variants resolved inside the tar reader;
//! - else → unsupported-format error for that path, batch continues.
//!
//! Extraction always targets the current working directory; there is no
//! destination override. Files already present at an entry's relative
//! path are overwritten without confirmation (the container readers'
//! default, preserved). Open and read failures on one path are recorded
//! and do not abort the batch.
//!
use crate::common::archive::{tar, zip};
use crate::common::time;
use crate::core::error::{Result, ZiprError};
use crate::core::report::{ItemOutcome, RunReport};
use std::path::Path;
use tracing::{error, info};

/// # Handle Extract Command (`handle_extract`)
///
/// Entry point for an EXTRACT run. Unpacks each container in `paths` into
/// the current working directory and returns the per-item report.
///
/// ## Arguments
///
/// * `paths` - Container paths in caller-supplied order.
///
/// ## Returns
///
/// * `Result<RunReport>` - One `ItemReport` per path. Unsupported names
///   and failed containers are recorded, not propagated.
///
/// ## Errors
///
/// Returns an `Err` only when the current working directory itself cannot
/// be resolved.
pub fn handle_extract(paths: &[String]) -> Result<RunReport> {
    time::timed("extract", || {
        let target = std::env::current_dir().map_err(|e| {
            anyhow::anyhow!(ZiprError::FileSystem(format!(
                "cannot resolve current working directory: {e}"
            )))
        })?;
        Ok(extract_into(paths, &target))
    })
}

/// Per-path extraction loop against an explicit target directory. Split
/// from `handle_extract` so the dispatch and failure handling are
/// testable without touching the process working directory.
fn extract_into(paths: &[String], target: &Path) -> RunReport {
    let mut report = RunReport::new();

    for raw in paths {
        info!("unpacking archive [{}]", raw);
        let outcome = extract_one(raw, target);
        report.record(raw.as_str(), outcome);
    }

    report
}

fn extract_one(raw: &str, target: &Path) -> ItemOutcome {
    let path = Path::new(raw);

    if raw.contains(".zip") {
        match zip::extract_zip(path, target) {
            Ok(count) => {
                info!("unzipped archive [{}] ({} entries)", raw, count);
                ItemOutcome::Ok
            }
            Err(e) => {
                error!("failed to unzip [{}]: {:#}", raw, e);
                ItemOutcome::IoError
            }
        }
    } else if raw.contains(".tar") {
        match tar::extract_tar(path, target) {
            Ok(()) => {
                info!("untarred archive [{}]", raw);
                ItemOutcome::Ok
            }
            Err(e) => {
                error!("failed to untar [{}]: {:#}", raw, e);
                ItemOutcome::IoError
            }
        }
    } else {
        error!(
            "{}",
            ZiprError::UnsupportedFormat {
                path: raw.to_string()
            }
        );
        ItemOutcome::UnsupportedFormat
    }
}
