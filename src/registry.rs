//! # Rollcall Registry
//!
//! Holds every registered test case and suite hook-object, grouped into suite
//! buckets. Buckets keep the order in which their suite name was first seen, and
//! entries keep registration order within a bucket.
//!
//! ## Usage Workflow
//! ```rust
//! use rollcall::registry::Registry;
//! use rollcall::test::TestSuite;
//!
//! let mut builder = Registry::builder();
//! builder.register_test("standalone", "", || Ok(()));
//! builder.register_test("grouped", "Suite 1", || Ok(()));
//! builder.register_suite(TestSuite::from_fns("hooks", "Suite 1", || Ok(()), || Ok(())));
//! let registry = builder.build();
//! assert_eq!(registry.test_count(), 2);
//! ```
//!
//! ## Registry Invariant
//! A `Registry` is only obtainable from `RegistryBuilder::build`, and has no
//! mutating API. Registration therefore always completes before a run starts.

use crate::errors::Signal;
use crate::test::{TestCase, TestSuite};

/// Everything registered under one suite name.
#[derive(Debug, Default)]
pub struct SuiteBucket {
    name: String,
    cases: Vec<TestCase>,
    hooks: Vec<TestSuite>,
}

impl SuiteBucket {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Suite name; empty for standalone tests.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_standalone(&self) -> bool {
        self.name.is_empty()
    }

    /// Banner text for the suite.
    pub fn display_name(&self) -> &str {
        if self.is_standalone() {
            "Single Tests"
        } else {
            &self.name
        }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn hooks(&self) -> &[TestSuite] {
        &self.hooks
    }
}

/// The read-only set of registrations a run executes.
#[derive(Debug, Default)]
pub struct Registry {
    buckets: Vec<SuiteBucket>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn buckets(&self) -> &[SuiteBucket] {
        &self.buckets
    }

    /// Number of registered test cases across all buckets.
    pub fn test_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.cases.len()).sum()
    }
}

/// Collects registrations, then freezes them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    buckets: Vec<SuiteBucket>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `body` as test `name` in `suite` (empty for a standalone test).
    pub fn register_test<F>(
        &mut self,
        name: impl Into<String>,
        suite: impl Into<String>,
        body: F,
    ) -> &mut Self
    where
        F: Fn() -> Result<(), Signal> + 'static,
    {
        self.register_case(TestCase::new(name, body).in_suite(suite))
    }

    /// Registers a fully configured test case.
    pub fn register_case(&mut self, case: TestCase) -> &mut Self {
        self.bucket_mut(case.suite()).cases.push(case);
        self
    }

    /// Registers a suite hook-object under its suite name.
    pub fn register_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.bucket_mut(suite.suite()).hooks.push(suite);
        self
    }

    /// Freezes the registrations into a [`Registry`].
    ///
    /// Hook-objects filed under the empty suite name are kept but never run,
    /// since standalone tests have no setup or teardown phase.
    pub fn build(self) -> Registry {
        for bucket in self.buckets.iter().filter(|bucket| bucket.is_standalone()) {
            for hook in bucket.hooks() {
                tracing::warn!(
                    hook = hook.name(),
                    "suite hook-object has no suite name and will not run"
                );
            }
        }
        tracing::debug!(
            suites = self.buckets.len(),
            tests = self.buckets.iter().map(|b| b.cases.len()).sum::<usize>(),
            "registry built"
        );
        Registry {
            buckets: self.buckets,
        }
    }

    fn bucket_mut(&mut self, suite: &str) -> &mut SuiteBucket {
        let index = match self.buckets.iter().position(|bucket| bucket.name == suite) {
            Some(index) => index,
            None => {
                self.buckets.push(SuiteBucket::new(suite));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index]
    }
}
