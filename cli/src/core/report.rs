//! # Zipr Run Reports
//!
//! File: cli/src/core/report.rs
//!
//! ## Overview
//!
//! Structured per-item results for archive and extract runs. Every input
//! path processed by a command produces exactly one `ItemReport`, collected
//! into a `RunReport` that the command hands back to `main`. The report is
//! the machine-readable counterpart to the log stream: it drives the final
//! summary line and the process exit code.
//!
//! ## Architecture
//!
//! - `ItemOutcome`: what happened to one input path.
//! - `ItemReport`: the path paired with its outcome.
//! - `RunReport`: ordered collection of item reports plus the count of
//!   archive entries written (builder runs only).
//!
//! Item failures never unwind past the per-path loop; they land here.
//!
use std::fmt;

/// What happened to a single input path during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The path was processed fully.
    Ok,
    /// The path did not exist on the filesystem at processing time.
    MissingInput,
    /// The file name matched neither recognized container family.
    UnsupportedFormat,
    /// Opening, reading, or writing the item failed mid-flight.
    IoError,
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemOutcome::Ok => "ok",
            ItemOutcome::MissingInput => "missing-input",
            ItemOutcome::UnsupportedFormat => "unsupported-format",
            ItemOutcome::IoError => "io-error",
        };
        write!(f, "{}", label)
    }
}

/// One input path and the outcome of processing it.
#[derive(Clone, Debug)]
pub struct ItemReport {
    pub path: String,
    pub outcome: ItemOutcome,
}

/// Aggregated results of one archive or extract run.
///
/// Items appear in the caller-supplied order. `entries_added` counts the
/// archive entries written by a builder run (always zero for extraction).
#[derive(Debug, Default)]
pub struct RunReport {
    pub items: Vec<ItemReport>,
    pub entries_added: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for one input path.
    pub fn record(&mut self, path: impl Into<String>, outcome: ItemOutcome) {
        self.items.push(ItemReport {
            path: path.into(),
            outcome,
        });
    }

    /// Number of input paths that processed fully.
    pub fn succeeded(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.outcome == ItemOutcome::Ok)
            .count()
    }

    /// Number of input paths that failed in any way.
    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    /// True when every input path processed fully.
    pub fn all_ok(&self) -> bool {
        self.failed() == 0
    }
}
