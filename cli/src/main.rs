//! # Zipr Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the zipr CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Resolving the operation mode (archive vs. extract) and the one fatal
//!   validation: an invocation with neither an archive name nor the unzip
//!   flag exits with code 1 before any core logic runs
//! - Setting up the logging system from the level selector
//! - Routing execution to the archive or extract handler
//! - Turning the per-item run report into a summary line and exit code
//!
//! ## Architecture
//!
//! The application follows a flat flag-based surface (no subcommands):
//! `-n/--name` selects archive mode and names the container, `-u/--unzip`
//! selects extract mode, `-d/--log-level` picks one of six severities,
//! and the positional paths feed whichever handler runs. A non-empty name
//! takes precedence over the unzip flag.
//!
//! ## Examples
//!
//! ```bash
//! # Archive two directories into backup.zip (suffix appended as needed)
//! zipr -n backup src docs
//!
//! # Extract containers into the current directory, with debug logs
//! zipr -u -d debug backup.zip vendor.tar.gz
//! ```
//!
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::error::ZiprError;

// Declare the top-level modules of the CLI crate.
mod commands; // Operation handlers (archive, extract)
mod common; // Shared utilities (archive containers, timing)
mod core; // Core infrastructure (errors, run reports)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "zipr",
    about = "🗜️ zipr: zip or unzip selected paths",
    long_about = "Zip or unzip selected paths. Directories are archived recursively.\n\
                  The current directory is used as the working folder for extraction.",
    version
)]
struct Cli {
    /// Name of the archive to be created; selects archive mode.
    #[arg(short, long)]
    name: Option<String>,

    /// Unzip the given paths instead of archiving them.
    #[arg(short, long)]
    unzip: bool,

    /// Level of logs to be shown on screen.
    #[arg(short = 'd', long = "log-level", value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Paths to archive, or containers to extract, in order.
    #[arg(required = true)]
    paths: Vec<String>,
}

/// The six log severities selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    /// The filter directive handed to the tracing subscriber.
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Off => "off",
        }
    }
}

/// The mutually exclusive operation selected for this invocation.
/// Resolved exactly once; there are no state transitions during a run.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Archive { name: String },
    Extract,
}

/// Resolves the operation mode from the parsed flags.
///
/// A non-empty archive name selects archive mode and takes precedence
/// over the unzip flag; the unzip flag alone selects extract mode; with
/// neither, no mode is resolvable and validation fails.
fn resolve_mode(name: Option<&str>, unzip: bool) -> Option<Mode> {
    match name {
        Some(n) if !n.is_empty() => Some(Mode::Archive {
            name: normalize_archive_name(n),
        }),
        _ if unzip => Some(Mode::Extract),
        _ => None,
    }
}

/// Appends the `.zip` suffix exactly once when the name does not already
/// end with it. An exact suffix comparison, so a name ending in `.zip` is
/// never double-suffixed.
fn normalize_archive_name(name: &str) -> String {
    if name.ends_with(".zip") {
        name.to_string()
    } else {
        format!("{name}.zip")
    }
}

/// Builds and installs the tracing subscriber: stderr writer, compact
/// format, local-time millisecond timestamps. `RUST_LOG` overrides the
/// command-line selector when set.
fn init_logging(level: LogLevel) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d_%H-%M-%S%.3f".into()))
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();

    // The one fatal validation: no resolvable mode. Checked before any
    // logging or filesystem access.
    let Some(mode) = resolve_mode(cli.name.as_deref(), cli.unzip) else {
        eprintln!(
            "{}",
            ZiprError::ArgumentParsing(
                "Provide a name for the archive to be created with the `-n` option, \
                 or provide the `-u` flag to unzip the paths selected."
                    .to_string()
            )
        );
        std::process::exit(1);
    };

    init_logging(cli.log_level);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let result = match &mode {
        Mode::Archive { name } => commands::archive::handle_archive(name, &cli.paths),
        Mode::Extract => commands::extract::handle_extract(&cli.paths),
    };

    match result {
        Ok(report) => {
            if report.all_ok() {
                tracing::info!(
                    "processed {} of {} paths",
                    report.succeeded(),
                    report.items.len()
                );
            } else {
                // Item-level failures were already logged per path; the
                // summary and exit code make them machine-visible too.
                tracing::warn!(
                    "{} of {} paths failed",
                    report.failed(),
                    report.items.len()
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
