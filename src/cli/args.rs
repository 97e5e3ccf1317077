//! Defines the command-line arguments for the rollcall binary.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, ValueEnum};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Runs the registered rollcall test suites and reports the results."
)]
pub struct RollcallArgs {
    /// When to colour outcome lines.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, env = "ROLLCALL_COLOR")]
    pub color: ColorMode,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log filter for diagnostics on stderr, e.g. `debug` or `rollcall=trace`.
    #[arg(long = "log", env = "ROLLCALL_LOG", default_value = "warn")]
    pub log_filter: String,

    /// List registered suites and tests without running them.
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
