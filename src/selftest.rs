//! Built-in self-test suites run by the `rollcall` binary.
//!
//! These exercise every outcome the runner can record. Every deliberate failure
//! is declared as an expected failure, so a healthy build exits with status 0
//! and reports exactly one missed expected failure.

use crate::errors::{raise, Signal, UNEXPECTED_REASON};
use crate::registry::RegistryBuilder;
use crate::test::{ExceptionKind, Fixture, FixtureGuard, SuiteFixture, TestCase};
use crate::{confirm, confirm_false, confirm_true};

pub const SUITE_ONE: &str = "Suite 1";

/// Registers all self-test cases and hook-objects.
pub fn register(builder: &mut RegistryBuilder) {
    register_basics(builder);
    register_expected_failures(builder);
    register_confirms(builder);
    register_fixtures(builder);
    register_suite_one(builder);
}

fn int_kind() -> ExceptionKind {
    ExceptionKind::named::<i32>("int")
}

fn register_basics(builder: &mut RegistryBuilder) {
    builder
        .register_test("Test can be created", "", || Ok(()))
        .register_case(
            TestCase::new("Test that fails work", || raise(1_i32)).expect_failure(UNEXPECTED_REASON),
        )
        .register_case(
            TestCase::new("Test with throw can be created", || raise(1_i32))
                .expect_exception(int_kind()),
        );
}

fn register_expected_failures(builder: &mut RegistryBuilder) {
    builder
        .register_case(
            TestCase::new("Test that never throws can be created", || Ok(()))
                .expect_exception(int_kind())
                .expect_failure("Expected exception type int was not thrown."),
        )
        .register_case(
            TestCase::new("Test that throws unexpectedly can be created", || raise("Unexpected"))
                .expect_failure(UNEXPECTED_REASON),
        )
        .register_case(
            TestCase::new("Test that throws wrong type can be created", || raise("Wrong type"))
                .expect_exception(int_kind())
                .expect_failure(UNEXPECTED_REASON),
        )
        .register_case(
            TestCase::new("Test that should throw unexpectedly can be created", || Ok(()))
                .expect_failure(UNEXPECTED_REASON),
        );
}

// ============================================================================
// CONFIRMS
// ============================================================================

fn is_passing_grade(value: i32) -> bool {
    value >= 60
}

fn multiply_by_2(value: i32) -> i32 {
    value * 2
}

fn register_confirms(builder: &mut RegistryBuilder) {
    builder
        .register_test("Test passing grades", "", || {
            confirm_false!(is_passing_grade(0));
            confirm_true!(is_passing_grade(100));
            Ok(())
        })
        .register_case(
            TestCase::new("Test bool confirm that fails", || {
                confirm_true!(is_passing_grade(0));
                Ok(())
            })
            .expect_failure("    Expected: true"),
        )
        .register_test("Test int confirms", "", || {
            confirm!(0, multiply_by_2(0));
            confirm!(4, multiply_by_2(2));
            Ok(())
        })
        .register_case(
            TestCase::new("Test int confirm that fails", || {
                confirm!(0, multiply_by_2(1));
                Ok(())
            })
            .expect_failure("    Expected: 0\n    Actual  : 2"),
        )
        .register_test("Test float confirms", "", || {
            confirm!(0.3_f32, 0.1_f32 * 3.0);
            confirm!(0.333333_f64, 1.0_f64 / 3.0);
            Ok(())
        })
        .register_test("Test string confirms", "", || {
            let greeting = String::from("hello");
            confirm!("hello", &greeting);
            confirm!(greeting, "hello");
            Ok(())
        });
}

// ============================================================================
// FIXTURES
// ============================================================================

fn create_test_table() -> String {
    "test_data_01".to_string()
}

fn create_test_entry() -> i32 {
    100
}

fn update_test_entry_name(_id: i32, name: &str) -> Result<(), Signal> {
    if name.is_empty() {
        return raise(1_i32);
    }
    Ok(())
}

/// A temporary table created for a whole suite.
#[derive(Debug, Default)]
pub struct TempTable {
    name: String,
}

impl TempTable {
    pub fn table_name(&self) -> String {
        self.name.clone()
    }
}

impl Fixture for TempTable {
    fn setup(&mut self) -> Result<(), Signal> {
        self.name = create_test_table();
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), Signal> {
        tracing::trace!(table = %self.name, "dropping test table");
        Ok(())
    }
}

/// A temporary row created for a single test.
#[derive(Debug, Default)]
pub struct TempEntry {
    id: i32,
}

impl TempEntry {
    pub fn id(&self) -> i32 {
        self.id
    }
}

impl Fixture for TempEntry {
    fn setup(&mut self) -> Result<(), Signal> {
        self.id = create_test_entry();
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), Signal> {
        tracing::trace!(id = self.id, "deleting test entry");
        Ok(())
    }
}

fn register_fixtures(builder: &mut RegistryBuilder) {
    builder
        .register_case(
            TestCase::new("Test will run setup and teardown code", || {
                let entry = FixtureGuard::<TempEntry>::acquire()?;
                update_test_entry_name(entry.id(), "")
            })
            .expect_exception(int_kind()),
        )
        .register_test("Test will run multiple setup and teardown code", "", || {
            let first = FixtureGuard::<TempEntry>::acquire()?;
            let second = FixtureGuard::<TempEntry>::acquire()?;
            update_test_entry_name(first.id(), "abc")?;
            update_test_entry_name(second.id(), "def")
        });
}

fn register_suite_one(builder: &mut RegistryBuilder) {
    let table1 = SuiteFixture::<TempTable>::default();
    let table2 = SuiteFixture::<TempTable>::default();

    builder
        .register_suite(table1.hook("Test suite setup/teardown 1", SUITE_ONE))
        .register_suite(table2.hook("Test suite setup/teardown 2", SUITE_ONE))
        .register_test("Test part 1 of suite", SUITE_ONE, move || {
            confirm!("test_data_01", table1.get().table_name());
            confirm!("test_data_01", table2.get().table_name());
            Ok(())
        })
        .register_case(
            TestCase::new("Test part 2 of suite", || raise(1_i32))
                .in_suite(SUITE_ONE)
                .expect_exception(int_kind()),
        );
}
