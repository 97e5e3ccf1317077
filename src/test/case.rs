use std::any::{Any, TypeId};
use std::fmt;

use crate::errors::Signal;

/// The user-supplied logic of a test case.
pub type TestBody = Box<dyn Fn() -> Result<(), Signal>>;

/// Type tag for an expected-exception contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionKind {
    type_id: TypeId,
    name: &'static str,
}

impl ExceptionKind {
    /// Tag for `T`, displayed with its Rust type name.
    pub fn of<T: Any>() -> Self {
        Self::named::<T>(std::any::type_name::<T>())
    }

    /// Tag for `T` with a custom display name, e.g. `named::<i32>("int")`.
    pub fn named<T: Any>(name: &'static str) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, payload: &(dyn Any + Send)) -> bool {
        payload.type_id() == self.type_id
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A named, suite-scoped unit of work.
pub struct TestCase {
    name: String,
    suite: String,
    body: TestBody,
    expected_failure_reason: String,
    expected_exception: Option<ExceptionKind>,
}

impl TestCase {
    /// A standalone test case.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> Result<(), Signal> + 'static,
    {
        Self {
            name: name.into(),
            suite: String::new(),
            body: Box::new(body),
            expected_failure_reason: String::new(),
            expected_exception: None,
        }
    }

    /// Places the case in the named suite.
    pub fn in_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = suite.into();
        self
    }

    /// Declares that the body must fail with exactly this reason.
    pub fn expect_failure(mut self, reason: impl Into<String>) -> Self {
        self.expected_failure_reason = reason.into();
        self
    }

    /// Declares that the body must raise a payload of this kind.
    pub fn expect_exception(mut self, kind: ExceptionKind) -> Self {
        self.expected_exception = Some(kind);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn expected_failure_reason(&self) -> &str {
        &self.expected_failure_reason
    }

    pub fn expected_exception(&self) -> Option<ExceptionKind> {
        self.expected_exception
    }

    /// Runs the body, applying the expected-exception contract if one is set.
    ///
    /// Panics are not caught here; the runner owns that boundary.
    pub fn run(&self) -> Result<(), Signal> {
        self.settle((self.body)())
    }

    pub(crate) fn body(&self) -> &TestBody {
        &self.body
    }

    /// Applies the expected-exception contract to a body result.
    ///
    /// A raised payload of the declared kind satisfies the contract and
    /// completing normally violates it. Every other signal passes through.
    pub(crate) fn settle(&self, result: Result<(), Signal>) -> Result<(), Signal> {
        let Some(kind) = self.expected_exception else {
            return result;
        };
        match result {
            Ok(()) => Err(Signal::ContractViolation {
                kind: kind.name().to_string(),
            }),
            Err(Signal::Unclassified(raised)) if kind.matches(raised.payload()) => Ok(()),
            Err(other) => Err(other),
        }
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("suite", &self.suite)
            .field("expected_failure_reason", &self.expected_failure_reason)
            .field("expected_exception", &self.expected_exception)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::raise;

    #[test]
    fn contract_accepts_matching_payload() {
        let case = TestCase::new("throws int", || raise(1_i32))
            .expect_exception(ExceptionKind::named::<i32>("int"));
        assert!(case.run().is_ok());
    }

    #[test]
    fn contract_reports_missing_exception() {
        let case =
            TestCase::new("never throws", || Ok(())).expect_exception(ExceptionKind::named::<i32>("int"));
        let signal = case.run().unwrap_err();
        assert_eq!(signal.reason(), "Expected exception type int was not thrown.");
        assert_eq!(signal.confirm_line(), None);
    }

    #[test]
    fn contract_passes_other_payloads_through() {
        let case = TestCase::new("wrong type", || raise("Wrong type"))
            .expect_exception(ExceptionKind::of::<i32>());
        assert!(matches!(case.run(), Err(Signal::Unclassified(_))));
    }
}
