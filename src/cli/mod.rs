//! The rollcall command-line interface.
//!
//! Binaries that register their own tests call [`main_with`] from `main`; the
//! bundled `rollcall` binary runs the built-in self-test suites through it.

use clap::Parser;

use crate::cli::args::{ReportFormat, RollcallArgs};
use crate::cli::config::{init_logging, RunConfig};
use crate::cli::output::{OutputBuffer, StdoutSink};
use crate::registry::{Registry, RegistryBuilder};
use crate::test::{RunReport, Runner};

pub mod args;
pub mod config;
pub mod output;

/// The entry point for the bundled binary.
pub fn run() -> i32 {
    main_with(crate::selftest::register)
}

/// Parses arguments, lets `register` populate the registry, then runs it.
///
/// Returns the process exit code: the failed count, clamped to 255.
pub fn main_with<R>(register: R) -> i32
where
    R: FnOnce(&mut RegistryBuilder),
{
    let args = RollcallArgs::parse();
    let config = RunConfig::from(&args);
    init_logging(&config.log_filter);

    let mut builder = Registry::builder();
    register(&mut builder);
    let registry = builder.build();

    if config.list_only {
        print_listing(&registry);
        return 0;
    }

    let report = run_registry(&registry, &config);
    if let Some(error) = &report.aborted {
        eprintln!("{:?}", miette::Report::new(error.clone()));
    }
    report.exit_code()
}

/// Runs `registry` and writes the report in the configured format.
pub fn run_registry(registry: &Registry, config: &RunConfig) -> RunReport {
    match config.format {
        ReportFormat::Text => {
            let mut sink = StdoutSink::new(config.use_colors);
            Runner::new(&mut sink).run_all(registry)
        }
        ReportFormat::Json => {
            let mut discarded = OutputBuffer::new();
            let report = Runner::new(&mut discarded).run_all(registry);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(error) => tracing::error!(%error, "failed to serialize run report"),
            }
            report
        }
    }
}

fn print_listing(registry: &Registry) {
    for bucket in registry.buckets() {
        println!("{}", bucket.display_name());
        for hook in bucket.hooks() {
            println!("  [hooks] {}", hook.name());
        }
        for case in bucket.cases() {
            println!("  {}", case.name());
        }
    }
}
