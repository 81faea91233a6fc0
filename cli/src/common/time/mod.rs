//! # Zipr Timing Utilities (`common::time`)
//!
//! File: cli/src/common/time/mod.rs
//!
//! ## Overview
//!
//! Small helpers for timing whole operations and rendering elapsed time in
//! a human-readable `Ndays HH:MM:SS.mmm` shape. Both commands wrap their
//! run in `timed` so every invocation ends with a single "took" line.
//!
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Renders a duration as `Ndays HH:MM:SS.mmm`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.subsec_millis();
    let total_secs = elapsed.as_secs();
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = (total_secs / 3600) % 24;
    let days = total_secs / 86_400;
    format!(
        "{}days {:02}:{:02}:{:02}.{:03}",
        days, hours, minutes, seconds, millis
    )
}

/// # Timed Run (`timed`)
///
/// Runs `f`, logging a debug line when the operation starts and finishes
/// and an info line with the total elapsed time.
///
/// ## Arguments
///
/// * `label` - Operation name used in the log lines.
/// * `f` - The operation to run.
///
/// ## Returns
///
/// * Whatever `f` returns, unchanged.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    debug!(">>> [{}] started", label);
    let start = Instant::now();
    let result = f();
    debug!("<<< [{}] finished", label);
    info!("=== [{}] took [{}]", label, format_elapsed(start.elapsed()));
    result
}
