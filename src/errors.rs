//! Rollcall Error Handling
//!
//! Two families of errors live here:
//!
//! - [`Signal`]: the outcome channel of a test body or suite hook. A body returns
//!   `Result<(), Signal>` and the runner classifies the signal into exactly one of
//!   three kinds: comparison failure, contract violation, or unclassified failure.
//! - [`RunError`]: a structural problem with the registered set of tests that
//!   aborts a run, reported through `miette` diagnostics.

use std::any::Any;
use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Reason recorded for any signal the runner cannot classify.
pub const UNEXPECTED_REASON: &str = "Unexpected exception thrown.";

// ============================================================================
// SIGNALS - what a test body can report to the runner
// ============================================================================

/// The propagation channel from a running body up to the runner.
///
/// The `Display` output of a signal is the failure reason recorded for the test,
/// and is what an expected-failure reason is compared against.
#[derive(Debug, Error, Diagnostic)]
pub enum Signal {
    /// A `confirm` comparison did not hold.
    #[error("{0}")]
    #[diagnostic(code(rollcall::confirm))]
    Comparison(ComparisonFailure),

    /// A test declared an expected exception kind that its body never raised.
    #[error("Expected exception type {kind} was not thrown.")]
    #[diagnostic(
        code(rollcall::contract),
        help("the body completed normally; raise the declared kind or drop the contract")
    )]
    ContractViolation { kind: String },

    /// Anything else: a raised payload or a caught panic.
    #[error("{}", UNEXPECTED_REASON)]
    #[diagnostic(code(rollcall::unclassified))]
    Unclassified(Raised),
}

impl Signal {
    /// The source line of the confirm call, for comparison failures only.
    pub fn confirm_line(&self) -> Option<u32> {
        match self {
            Signal::Comparison(failure) => Some(failure.line()),
            _ => None,
        }
    }

    /// The failure reason as recorded on the test.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl From<ComparisonFailure> for Signal {
    fn from(failure: ComparisonFailure) -> Self {
        Signal::Comparison(failure)
    }
}

/// Raises an arbitrary typed payload from a test body.
///
/// The payload type is what an expected-exception contract matches on.
///
/// ```
/// use rollcall::{raise, Signal};
///
/// fn update_name(name: &str) -> Result<(), Signal> {
///     if name.is_empty() {
///         return raise(1_i32);
///     }
///     Ok(())
/// }
///
/// assert!(update_name("").is_err());
/// ```
pub fn raise<T, P: Any + Send>(payload: P) -> Result<T, Signal> {
    Err(Signal::Unclassified(Raised::new(payload)))
}

// ============================================================================
// COMPARISON FAILURES
// ============================================================================

/// What a failed `confirm` saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonFailure {
    /// Boolean confirms only report the expected side.
    Bool { expected: bool, line: u32 },
    /// Every other rule renders both sides as text.
    Values {
        expected: String,
        actual: String,
        line: u32,
    },
}

impl ComparisonFailure {
    pub fn line(&self) -> u32 {
        match self {
            ComparisonFailure::Bool { line, .. } | ComparisonFailure::Values { line, .. } => *line,
        }
    }
}

impl fmt::Display for ComparisonFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonFailure::Bool { expected, .. } => write!(f, "    Expected: {}", expected),
            ComparisonFailure::Values {
                expected, actual, ..
            } => write!(f, "    Expected: {}\n    Actual  : {}", expected, actual),
        }
    }
}

// ============================================================================
// RAISED PAYLOADS
// ============================================================================

/// A typed payload raised from a body, or the payload of a caught panic.
pub struct Raised {
    type_name: &'static str,
    payload: Box<dyn Any + Send>,
}

impl Raised {
    pub fn new<P: Any + Send>(payload: P) -> Self {
        Self {
            type_name: std::any::type_name::<P>(),
            payload: Box::new(payload),
        }
    }

    /// Wraps the payload of `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self {
            type_name: "panic",
            payload,
        }
    }

    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Best-effort text of the payload, for logging.
    pub fn describe(&self) -> String {
        if let Some(text) = self.payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = self.payload.downcast_ref::<String>() {
            text.clone()
        } else {
            format!("<{}>", self.type_name)
        }
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raised")
            .field("type_name", &self.type_name)
            .field("payload", &self.describe())
            .finish()
    }
}

// ============================================================================
// STRUCTURAL ERRORS
// ============================================================================

/// Aborts a run before every suite has been processed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RunError {
    #[error("Test suite is not found. Exiting test application.")]
    #[diagnostic(
        code(rollcall::suite_not_found),
        help("register a TestSuite hook-object for suite '{suite}' before running")
    )]
    SuiteNotFound { suite: String },
}
