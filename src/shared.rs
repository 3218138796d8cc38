//! Type-erased, reference-counted specifications
//!
//! Generic combinators encode the whole tree in their type, which is what you
//! want most of the time. When rules are chosen at runtime, stored in a
//! collection, or reused under several parents, erase them into a
//! [`SharedSpecification`] instead.

use std::fmt;
use std::sync::Arc;

use crate::combinators::Specification;

/// A cheaply clonable handle to any specification over `C`.
///
/// Cloning shares the underlying rule; it is never deep-copied.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let rules: Vec<SharedSpecification<'static, str>> = vec![
///     from_fn(|s: &str| !s.is_empty()).shared(),
///     from_fn(|s: &str| s.len() <= 8).shared(),
///     always().shared(),
/// ];
///
/// let accept_all = rules.iter().all(|rule| rule.is_satisfied_by("username"));
/// assert!(accept_all);
/// ```
pub struct SharedSpecification<'a, C: ?Sized> {
    inner: Arc<dyn Specification<C> + 'a>,
}

impl<'a, C: ?Sized> SharedSpecification<'a, C> {
    /// Wrap a specification in a shared handle.
    pub fn new<S>(spec: S) -> Self
    where
        S: Specification<C> + 'a,
    {
        Self {
            inner: Arc::new(spec),
        }
    }

    /// Whether two handles point at the same underlying specification.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<'a, C: ?Sized> From<Arc<dyn Specification<C> + 'a>> for SharedSpecification<'a, C> {
    fn from(inner: Arc<dyn Specification<C> + 'a>) -> Self {
        Self { inner }
    }
}

impl<'a, C: ?Sized> From<Box<dyn Specification<C> + 'a>> for SharedSpecification<'a, C> {
    fn from(inner: Box<dyn Specification<C> + 'a>) -> Self {
        Self {
            inner: Arc::from(inner),
        }
    }
}

impl<C: ?Sized> Clone for SharedSpecification<'_, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ?Sized> fmt::Debug for SharedSpecification<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSpecification").finish_non_exhaustive()
    }
}

impl<C: ?Sized> Specification<C> for SharedSpecification<'_, C> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.inner.is_satisfied_by(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::SpecificationExt;
    use crate::constant::{always, never};
    use crate::from_fn;

    #[test]
    fn test_shared_child_under_two_parents() {
        let positive = from_fn(|n: &i32| *n > 0).shared();

        let even_positive = positive.clone().and(from_fn(|n: &i32| n % 2 == 0));
        let small_positive = positive.clone().and(from_fn(|n: &i32| *n < 10));

        assert!(even_positive.is_satisfied_by(&12));
        assert!(!small_positive.is_satisfied_by(&12));
        assert!(small_positive.is_satisfied_by(&3));
        assert!(positive.is_satisfied_by(&1));
    }

    #[test]
    fn test_clone_shares_rule() {
        let a = always().shared();
        let b = a.clone();
        let c: SharedSpecification<'static, u8> = always().shared();

        assert!(SharedSpecification::<u8>::ptr_eq(&a, &b));
        assert!(!SharedSpecification::ptr_eq(&a, &c));
    }

    #[test]
    fn test_borrowing_closure() {
        let banned = vec!["root".to_string(), "admin".to_string()];
        let allowed = SharedSpecification::new(from_fn(|name: &str| {
            !banned.iter().any(|b| b == name)
        }));

        assert!(allowed.is_satisfied_by("alice"));
        assert!(!allowed.is_satisfied_by("root"));
    }

    #[test]
    fn test_from_boxed_trait_object() {
        let boxed: Box<dyn Specification<i32>> = Box::new(never());
        let shared = SharedSpecification::from(boxed);
        assert!(!shared.is_satisfied_by(&0));
        assert!(shared.not().is_satisfied_by(&0));
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedSpecification<'static, str>>();
    }
}
