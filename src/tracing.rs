//! Tracing support for specifications.
//!
//! This module provides the `Traced` wrapper and `traced` method for emitting
//! an event each time a specification is evaluated. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use std::fmt;
use std::marker::PhantomData;

use crate::combinators::Specification;

/// A specification that reports every evaluation as a `TRACE` event.
///
/// Created by [`SpecificationTracingExt::traced`].
pub struct Traced<S, C: ?Sized> {
    inner: S,
    name: &'static str,
    candidate: PhantomData<fn(&C) -> bool>,
}

impl<S, C: ?Sized> Traced<S, C> {
    /// The name attached to emitted events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped specification.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Clone, C: ?Sized> Clone for Traced<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
            candidate: PhantomData,
        }
    }
}

impl<S: fmt::Debug, C: ?Sized> fmt::Debug for Traced<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("name", &self.name)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S, C> Specification<C> for Traced<S, C>
where
    C: ?Sized,
    S: Specification<C>,
{
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        let satisfied = self.inner.is_satisfied_by(candidate);
        ::tracing::trace!(specification = self.name, satisfied, "specification evaluated");
        satisfied
    }
}

/// Extension trait for adding tracing to specifications.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait SpecificationTracingExt<C: ?Sized>: Specification<C> + Sized {
    /// Emit a `TRACE` event named `name` with the outcome of every evaluation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    /// use specification::tracing::SpecificationTracingExt;
    ///
    /// let adult = from_fn(|age: &u32| *age >= 18).traced("adult");
    /// let can_rent = adult.and(from_fn(|age: &u32| *age >= 25).traced("senior_driver"));
    ///
    /// // Logs `specification="adult" satisfied=true` then
    /// // `specification="senior_driver" satisfied=false`.
    /// assert!(!can_rent.is_satisfied_by(&21));
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self, C> {
        Traced {
            inner: self,
            name,
            candidate: PhantomData,
        }
    }
}

impl<C: ?Sized, S: Specification<C>> SpecificationTracingExt<C> for S {}
