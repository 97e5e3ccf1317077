//! Run configuration resolved from the command line and environment.

use tracing_subscriber::EnvFilter;

use crate::cli::args::{ColorMode, ReportFormat, RollcallArgs};

/// Configuration for test execution and reporting.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub use_colors: bool,
    pub format: ReportFormat,
    pub log_filter: String,
    pub list_only: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
            format: ReportFormat::Text,
            log_filter: "warn".to_string(),
            list_only: false,
        }
    }
}

impl From<&RollcallArgs> for RunConfig {
    fn from(args: &RollcallArgs) -> Self {
        let use_colors = match args.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        };
        Self {
            // JSON output is for machines; never colour it.
            use_colors: use_colors && args.format == ReportFormat::Text,
            format: args.format,
            log_filter: args.log_filter.clone(),
            list_only: args.list,
        }
    }
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// An unparsable filter falls back to `warn`. Calling this twice is harmless;
/// the second installation is ignored.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
