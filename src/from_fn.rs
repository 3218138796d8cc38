//! Closure-backed leaf specifications

use std::fmt;

use crate::combinators::Specification;

/// A leaf specification backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}

impl<C, F> Specification<C> for FromFn<F>
where
    C: ?Sized,
    F: Fn(&C) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        (self.f)(candidate)
    }
}

/// Turn a closure into a composable specification.
///
/// The closure's argument type fixes the candidate type, so annotate it.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let has_at = from_fn(|email: &str| email.contains('@'));
/// let has_dot = from_fn(|email: &str| email.contains('.'));
/// let plausible = has_at.and(has_dot);
///
/// assert!(plausible.is_satisfied_by("user@example.com"));
/// assert!(!plausible.is_satisfied_by("user.example.com"));
/// ```
pub fn from_fn<C, F>(f: F) -> FromFn<F>
where
    C: ?Sized,
    F: Fn(&C) -> bool + Send + Sync,
{
    FromFn { f }
}
