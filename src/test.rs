//! Test cases, suite hook-objects, and the records a run produces for them.

use serde::Serialize;

pub mod case;

pub use case::{ExceptionKind, TestBody, TestCase};
pub use fixture::{Fixture, FixtureGuard, SuiteFixture};
pub use runner::{run_to_string, Runner};
pub use suite::{HookFns, SuiteHooks, TestSuite};

/// Terminal state of an executed test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    ExpectedFailure,
    MissedExpectedFailure,
}

impl Outcome {
    /// Whether this outcome counts toward the passed total.
    pub fn counts_as_pass(&self) -> bool {
        matches!(self, Outcome::Passed | Outcome::ExpectedFailure)
    }
}

/// What the runner recorded for one test case.
///
/// `reason` is non-empty exactly when the outcome is not a plain pass: it holds
/// the failure reason, the matched expected-failure reason, or the missed
/// expected-failure notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub name: String,
    pub suite: String,
    pub outcome: Outcome,
    pub reason: String,
    pub confirm_line: Option<u32>,
}

/// Which suite hook ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPhase {
    Setup,
    Teardown,
}

/// What the runner recorded for one suite hook invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookRecord {
    pub name: String,
    pub suite: String,
    pub phase: HookPhase,
    pub passed: bool,
    pub reason: String,
    pub confirm_line: Option<u32>,
}

/// Aggregate result of one run.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub missed: usize,
    pub cases: Vec<CaseRecord>,
    pub hooks: Vec<HookRecord>,
    #[serde(serialize_with = "serialize_abort")]
    pub aborted: Option<crate::errors::RunError>,
}

impl RunReport {
    /// Process exit status: the failed count, clamped so it never wraps to zero.
    pub fn exit_code(&self) -> i32 {
        self.failed.min(255) as i32
    }

    pub fn record(&self, suite: &str, name: &str) -> Option<&CaseRecord> {
        self.cases
            .iter()
            .find(|record| record.suite == suite && record.name == name)
    }
}

fn serialize_abort<S: serde::Serializer>(
    aborted: &Option<crate::errors::RunError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match aborted {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}
