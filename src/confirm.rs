//! # Rollcall Confirm Engine
//!
//! Compares an expected value to an actual value under a type-specific rule and
//! produces a [`ComparisonFailure`] on mismatch. Nothing here writes output or
//! touches test state; the runner records what the failure says.
//!
//! ## Rules
//!
//! - **Boolean**: exact equality, only the expected side is reported.
//! - **Exact**: integers, `char`, strings, and any `PartialEq + Display` type
//!   through [`confirm_exact`]. Both sides are rendered.
//! - **`f32`**: fails when `|actual - expected| > 0.0001`.
//! - **`f64`**: fails when `|actual - expected| > 0.000001`.
//!
//! The [`confirm!`](crate::confirm!), [`confirm_true!`](crate::confirm_true!)
//! and [`confirm_false!`](crate::confirm_false!) macros capture the call-site
//! line and propagate the failure with `?`.
//!
//! ```
//! use rollcall::{confirm, confirm_true, Signal};
//!
//! fn body() -> Result<(), Signal> {
//!     confirm!(4_i32, 2 + 2);
//!     confirm_true!(4 > 2);
//!     confirm!("ready", String::from("ready"));
//!     Ok(())
//! }
//!
//! assert!(body().is_ok());
//! ```

use std::fmt::Display;

use crate::errors::{ComparisonFailure, Signal};

/// Tolerance for single precision comparisons.
pub const F32_TOLERANCE: f32 = 0.0001;
/// Tolerance for double precision comparisons.
pub const F64_TOLERANCE: f64 = 0.000001;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// A value that can be confirmed against an actual value of type `A`.
///
/// Implement this for your own types with [`confirm_exact`] when plain
/// equality and `Display` rendering are what you want.
pub trait Confirmable<A = Self> {
    fn confirm_against(self, actual: A, line: u32) -> Result<(), ComparisonFailure>;
}

/// Confirms `actual` against `expected`, reporting `line` on mismatch.
///
/// Prefer the [`confirm!`](crate::confirm!) macro, which fills in the line.
pub fn confirm<E, A>(expected: E, actual: A, line: u32) -> Result<(), Signal>
where
    E: Confirmable<A>,
{
    expected
        .confirm_against(actual, line)
        .map_err(Signal::Comparison)
}

/// The exact-equality rule for any comparable, printable type.
pub fn confirm_exact<E, A>(expected: &E, actual: &A, line: u32) -> Result<(), ComparisonFailure>
where
    E: PartialEq<A> + Display + ?Sized,
    A: Display + ?Sized,
{
    if expected == actual {
        return Ok(());
    }
    Err(ComparisonFailure::Values {
        expected: expected.to_string(),
        actual: actual.to_string(),
        line,
    })
}

// ============================================================================
// RULE IMPLEMENTATIONS
// ============================================================================

impl Confirmable for bool {
    fn confirm_against(self, actual: bool, line: u32) -> Result<(), ComparisonFailure> {
        if self == actual {
            Ok(())
        } else {
            Err(ComparisonFailure::Bool {
                expected: self,
                line,
            })
        }
    }
}

macro_rules! exact_confirmable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Confirmable for $ty {
                fn confirm_against(self, actual: $ty, line: u32) -> Result<(), ComparisonFailure> {
                    confirm_exact(&self, &actual, line)
                }
            }
        )*
    };
}

exact_confirmable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

macro_rules! tolerant_confirmable {
    ($ty:ty, $tolerance:expr) => {
        impl Confirmable for $ty {
            fn confirm_against(self, actual: $ty, line: u32) -> Result<(), ComparisonFailure> {
                // A NaN difference is never greater than the tolerance, so it passes.
                if (actual - self).abs() > $tolerance {
                    return Err(ComparisonFailure::Values {
                        expected: self.to_string(),
                        actual: actual.to_string(),
                        line,
                    });
                }
                Ok(())
            }
        }
    };
}

tolerant_confirmable!(f32, F32_TOLERANCE);
tolerant_confirmable!(f64, F64_TOLERANCE);

impl<A: AsRef<str>> Confirmable<A> for &str {
    fn confirm_against(self, actual: A, line: u32) -> Result<(), ComparisonFailure> {
        confirm_exact(self, actual.as_ref(), line)
    }
}

impl<A: AsRef<str>> Confirmable<A> for String {
    fn confirm_against(self, actual: A, line: u32) -> Result<(), ComparisonFailure> {
        confirm_exact(self.as_str(), actual.as_ref(), line)
    }
}

impl<A: AsRef<str>> Confirmable<A> for &String {
    fn confirm_against(self, actual: A, line: u32) -> Result<(), ComparisonFailure> {
        confirm_exact(self.as_str(), actual.as_ref(), line)
    }
}

// ============================================================================
// MACROS
// ============================================================================

/// Confirms `actual` against `expected` and returns the failure from the
/// enclosing function with `?`.
#[macro_export]
macro_rules! confirm {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::confirm::confirm($expected, $actual, line!())?
    };
}

/// Confirms that `actual` is `true`.
#[macro_export]
macro_rules! confirm_true {
    ($actual:expr $(,)?) => {
        $crate::confirm::confirm(true, $actual, line!())?
    };
}

/// Confirms that `actual` is `false`.
#[macro_export]
macro_rules! confirm_false {
    ($actual:expr $(,)?) => {
        $crate::confirm::confirm(false, $actual, line!())?
    };
}
