//! Shared helpers for rollcall integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rollcall::{run_to_string, Registry, RegistryBuilder, RunReport, Runner, Signal, TestSuite};
use rollcall::cli::output::OutputBuffer;

/// Builds a registry from a registration closure.
pub fn registry_from(register: impl FnOnce(&mut RegistryBuilder)) -> Registry {
    let mut builder = Registry::builder();
    register(&mut builder);
    builder.build()
}

/// Runs a registry and returns both the report text and the structured report.
pub fn run_captured(registry: &Registry) -> (String, RunReport) {
    let mut buffer = OutputBuffer::new();
    let report = Runner::new(&mut buffer).run_all(registry);
    (buffer.into_string(), report)
}

pub fn run_text(registry: &Registry) -> String {
    run_to_string(registry).0
}

/// Records the order in which hooks and bodies run.
#[derive(Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    pub fn note(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// A body that notes `entry` and succeeds.
    pub fn body(&self, entry: &str) -> impl Fn() -> Result<(), Signal> + 'static {
        let journal = self.clone();
        let entry = entry.to_string();
        move || {
            journal.note(entry.clone());
            Ok(())
        }
    }

    /// A hook-object whose setup and teardown are journaled.
    pub fn hooks(&self, name: &str, suite: &str) -> TestSuite {
        let setup = self.body(&format!("{name} setup"));
        let teardown = self.body(&format!("{name} teardown"));
        TestSuite::from_fns(name, suite, setup, teardown)
    }
}
