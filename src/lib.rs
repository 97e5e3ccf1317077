//! Rollcall: a self-registering test execution engine.
//!
//! Tests and suite hook-objects are registered into a [`RegistryBuilder`], the
//! resulting [`Registry`] is handed to a [`Runner`], and the runner reports every
//! outcome and returns the failed count.
//!
//! ```
//! use rollcall::{confirm, Registry, TestSuite, run_to_string};
//!
//! fn multiply_by_2(value: i32) -> i32 {
//!     value * 2
//! }
//!
//! let mut builder = Registry::builder();
//! builder
//!     .register_suite(TestSuite::from_fns("G hooks", "G", || Ok(()), || Ok(())))
//!     .register_test("t1", "G", || {
//!         confirm!(2, multiply_by_2(1));
//!         Ok(())
//!     })
//!     .register_test("t2", "G", || {
//!         confirm!(0, multiply_by_2(1));
//!         Ok(())
//!     });
//! let registry = builder.build();
//!
//! let (report, failed) = run_to_string(&registry);
//! assert!(report.ends_with("Tests passed: 1\nTests failed: 1"));
//! assert_eq!(failed, 1);
//! ```

pub use crate::errors::{raise, ComparisonFailure, Raised, RunError, Signal};
pub use crate::registry::{Registry, RegistryBuilder, SuiteBucket};
pub use crate::test::{
    run_to_string, CaseRecord, ExceptionKind, Fixture, FixtureGuard, HookFns, HookPhase,
    HookRecord, Outcome, RunReport, Runner, SuiteFixture, SuiteHooks, TestCase, TestSuite,
};

pub mod cli;
pub mod confirm;
pub mod errors;
pub mod registry;
pub mod selftest;
pub mod test;
