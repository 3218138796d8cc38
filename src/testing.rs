//! Testing utilities and helpers for specifications
//!
//! This module provides a fixture leaf with a fixed answer, assertion macros
//! that report the offending candidate, and (with the `proptest` feature)
//! property-based testing support.
//!
//! # Examples
//!
//! ```rust
//! use specification::prelude::*;
//! use specification::testing::Returning;
//! use specification::{assert_satisfied, assert_unsatisfied};
//!
//! assert_satisfied!(Returning(true).and_not(Returning(false)), "AnyValue");
//! assert_unsatisfied!(Returning(false).or_not(Returning(true)), "AnyValue");
//! ```

use crate::combinators::Specification;

/// A leaf specification that ignores its candidate and returns a fixed answer.
///
/// Unlike [`TrueSpecification`](crate::TrueSpecification) and
/// [`FalseSpecification`](crate::FalseSpecification), the answer is data, so
/// truth tables can be driven from a loop or a property test.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
/// use specification::testing::Returning;
///
/// for (a, b) in [(true, true), (true, false), (false, true), (false, false)] {
///     let spec = Returning(a).or(Returning(b));
///     assert_eq!(spec.is_satisfied_by(&()), a || b);
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Returning(pub bool);

impl<C: ?Sized> Specification<C> for Returning {
    #[inline]
    fn is_satisfied_by(&self, _candidate: &C) -> bool {
        self.0
    }
}

/// Assert that a candidate satisfies a specification.
///
/// This macro will panic if the specification is not satisfied.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
/// use specification::assert_satisfied;
///
/// assert_satisfied!(from_fn(|n: &i32| *n > 0), &5);
/// ```
#[macro_export]
macro_rules! assert_satisfied {
    ($specification:expr, $candidate:expr) => {
        match $candidate {
            candidate => {
                if !$crate::Specification::is_satisfied_by(&$specification, candidate) {
                    panic!(
                        "Expected candidate to satisfy the specification, got: {:?}",
                        candidate
                    );
                }
            }
        }
    };
}

/// Assert that a candidate does not satisfy a specification.
///
/// This macro will panic if the specification is satisfied.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
/// use specification::assert_unsatisfied;
///
/// assert_unsatisfied!(from_fn(|s: &str| s.is_empty()), "hello");
/// ```
#[macro_export]
macro_rules! assert_unsatisfied {
    ($specification:expr, $candidate:expr) => {
        match $candidate {
            candidate => {
                if $crate::Specification::is_satisfied_by(&$specification, candidate) {
                    panic!(
                        "Expected candidate not to satisfy the specification, got: {:?}",
                        candidate
                    );
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Returning {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<bool>().prop_map(Returning).boxed()
    }
}
