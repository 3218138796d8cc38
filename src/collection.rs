//! N-ary combinators over fixed-size arrays of specifications
//!
//! These require every element to have the same type. For mixed rules either
//! chain `.and()` / `.or()` or erase the elements with
//! [`shared`](crate::SpecificationExt::shared) first.

use crate::combinators::Specification;

/// Satisfied when every specification is satisfied (const generic, zero-allocation).
///
/// An empty `AllOf` is satisfied by every candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllOf<S, const N: usize>([S; N]);

impl<C: ?Sized, S: Specification<C>, const N: usize> Specification<C> for AllOf<S, N> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.0.iter().all(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when all given specifications are.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let password = all_of([
///     from_fn(|s: &str| s.len() >= 8).shared(),
///     from_fn(|s: &str| s.chars().any(|c| c.is_ascii_digit())).shared(),
///     from_fn(|s: &str| s.chars().any(|c| c.is_uppercase())).shared(),
/// ]);
///
/// assert!(password.is_satisfied_by("Hunter2hunter"));
/// assert!(!password.is_satisfied_by("hunter2hunter"));
/// ```
pub fn all_of<S, const N: usize>(specifications: [S; N]) -> AllOf<S, N> {
    AllOf(specifications)
}

/// Satisfied when at least one specification is satisfied (const generic, zero-allocation).
///
/// An empty `AnyOf` is satisfied by no candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnyOf<S, const N: usize>([S; N]);

impl<C: ?Sized, S: Specification<C>, const N: usize> Specification<C> for AnyOf<S, N> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.0.iter().any(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when any given specification is.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let extension = |ext: &'static str| from_fn(move |name: &str| name.ends_with(ext));
/// let image = any_of([extension(".png"), extension(".jpg")]);
/// assert!(image.is_satisfied_by("cat.png"));
/// assert!(!image.is_satisfied_by("cat.txt"));
/// ```
pub fn any_of<S, const N: usize>(specifications: [S; N]) -> AnyOf<S, N> {
    AnyOf(specifications)
}

/// Satisfied when no specification is satisfied (const generic, zero-allocation).
///
/// Equivalent to `any_of(...).not()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoneOf<S, const N: usize>([S; N]);

impl<C: ?Sized, S: Specification<C>, const N: usize> Specification<C> for NoneOf<S, N> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        !self.0.iter().any(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when no given specification is.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let has = |c: char| from_fn(move |s: &str| s.contains(c));
/// let plain = none_of([has('<'), has('>')]);
/// assert!(plain.is_satisfied_by("hello"));
/// assert!(!plain.is_satisfied_by("<b>hello</b>"));
/// ```
pub fn none_of<S, const N: usize>(specifications: [S; N]) -> NoneOf<S, N> {
    NoneOf(specifications)
}
