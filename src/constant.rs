//! Constant specifications
//!
//! Leaves whose answer ignores the candidate entirely. Useful as the identity
//! element when folding a list of rules, or as a placeholder while a rule is
//! still being assembled.

use crate::combinators::Specification;

/// Specification satisfied by every candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrueSpecification;

impl<C: ?Sized> Specification<C> for TrueSpecification {
    #[inline]
    fn is_satisfied_by(&self, _candidate: &C) -> bool {
        true
    }
}

/// Specification satisfied by no candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FalseSpecification;

impl<C: ?Sized> Specification<C> for FalseSpecification {
    #[inline]
    fn is_satisfied_by(&self, _candidate: &C) -> bool {
        false
    }
}

/// Create a specification that every candidate satisfies.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// assert!(always().is_satisfied_by("anything"));
/// assert!(always().is_satisfied_by(&i64::MIN));
/// ```
pub const fn always() -> TrueSpecification {
    TrueSpecification
}

/// Create a specification that no candidate satisfies.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// assert!(!never().is_satisfied_by(""));
/// assert!(!never().is_satisfied_by(&Some(42)));
/// ```
pub const fn never() -> FalseSpecification {
    FalseSpecification
}
