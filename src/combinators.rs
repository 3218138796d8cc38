//! Core specification trait and logical combinators
//!
//! This module provides the foundational [`Specification`] trait, the
//! [`SpecificationExt`] extension trait that gives every specification its
//! combinator methods, and the five combinator types those methods build.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::shared::SharedSpecification;

/// A business rule over candidates of type `C`.
///
/// Implementors only supply [`is_satisfied_by`](Specification::is_satisfied_by);
/// the combinators (`and`, `and_not`, `or`, `or_not`, `not`) come from
/// [`SpecificationExt`], which is implemented for every specification.
///
/// Evaluation must be pure and total: the same candidate always yields the
/// same answer and evaluating never fails.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// struct Adult;
///
/// impl Specification<u32> for Adult {
///     fn is_satisfied_by(&self, age: &u32) -> bool {
///         *age >= 18
///     }
/// }
///
/// let retired = from_fn(|age: &u32| *age >= 67);
/// let working_age = Adult.and_not(retired);
///
/// assert!(working_age.is_satisfied_by(&30));
/// assert!(!working_age.is_satisfied_by(&70));
/// assert!(!working_age.is_satisfied_by(&12));
/// ```
pub trait Specification<C: ?Sized>: Send + Sync {
    /// Check whether the candidate satisfies this specification.
    fn is_satisfied_by(&self, candidate: &C) -> bool;
}

impl<C: ?Sized, S: Specification<C> + ?Sized> Specification<C> for &S {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<C: ?Sized, S: Specification<C> + ?Sized> Specification<C> for Box<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<C: ?Sized, S: Specification<C> + ?Sized> Specification<C> for Arc<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// Extension trait for specification combinators.
///
/// Every method consumes `self` and returns a new, concrete combinator value;
/// nothing is mutated. To keep using a specification after composing it,
/// compose a reference (`(&spec).and(other)`) or a [`SharedSpecification`].
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let even = from_fn(|n: &i32| n % 2 == 0);
/// let small = from_fn(|n: &i32| n.abs() < 10);
///
/// let spec = even.and(small).or_not(from_fn(|n: &i32| *n > 0));
/// assert!(spec.is_satisfied_by(&4));    // even and small
/// assert!(spec.is_satisfied_by(&-7));   // not positive
/// assert!(!spec.is_satisfied_by(&13));  // odd, positive
/// ```
pub trait SpecificationExt<C: ?Sized>: Specification<C> + Sized {
    /// Satisfied when both `self` and `other` are satisfied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    ///
    /// let p = from_fn(|n: &i32| *n > 0).and(from_fn(|n: &i32| *n < 100));
    /// assert!(p.is_satisfied_by(&50));
    /// assert!(!p.is_satisfied_by(&0));
    /// assert!(!p.is_satisfied_by(&100));
    /// ```
    fn and<S: Specification<C>>(self, other: S) -> And<Self, S, C> {
        And::new(self, other)
    }

    /// Satisfied when `self` is satisfied and `other` is not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    ///
    /// let p = from_fn(|s: &str| s.starts_with("tmp"))
    ///     .and_not(from_fn(|s: &str| s.ends_with(".keep")));
    /// assert!(p.is_satisfied_by("tmp_build.o"));
    /// assert!(!p.is_satisfied_by("tmp_cache.keep"));
    /// ```
    fn and_not<S: Specification<C>>(self, other: S) -> AndNot<Self, S, C> {
        AndNot::new(self, other)
    }

    /// Satisfied when at least one of `self` and `other` is satisfied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    ///
    /// let p = from_fn(|n: &i32| *n < 0).or(from_fn(|n: &i32| *n > 100));
    /// assert!(p.is_satisfied_by(&-5));
    /// assert!(p.is_satisfied_by(&150));
    /// assert!(!p.is_satisfied_by(&50));
    /// ```
    fn or<S: Specification<C>>(self, other: S) -> Or<Self, S, C> {
        Or::new(self, other)
    }

    /// Satisfied when `self` is satisfied or `other` is not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    ///
    /// let verified = from_fn(|u: &(bool, bool)| u.0);
    /// let suspended = from_fn(|u: &(bool, bool)| u.1);
    /// let may_post = verified.or_not(suspended);
    ///
    /// assert!(may_post.is_satisfied_by(&(true, true)));
    /// assert!(may_post.is_satisfied_by(&(false, false)));
    /// assert!(!may_post.is_satisfied_by(&(false, true)));
    /// ```
    fn or_not<S: Specification<C>>(self, other: S) -> OrNot<Self, S, C> {
        OrNot::new(self, other)
    }

    /// Satisfied when `self` is not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    ///
    /// let p = from_fn(|n: &i32| *n > 0).not();
    /// assert!(p.is_satisfied_by(&-5));
    /// assert!(p.is_satisfied_by(&0));
    /// assert!(!p.is_satisfied_by(&5));
    /// ```
    fn not(self) -> Not<Self, C> {
        Not::new(self)
    }

    /// Erase the concrete type behind a reference-counted handle.
    ///
    /// The result is cheap to clone, so one rule can be reused as a child of
    /// several composites without copying it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specification::prelude::*;
    ///
    /// let positive = from_fn(|n: &i64| *n > 0).shared();
    /// let even_positive = positive.clone().and(from_fn(|n: &i64| n % 2 == 0));
    /// let small_positive = positive.and(from_fn(|n: &i64| *n < 10));
    ///
    /// assert!(even_positive.is_satisfied_by(&12));
    /// assert!(small_positive.is_satisfied_by(&3));
    /// ```
    fn shared<'a>(self) -> SharedSpecification<'a, C>
    where
        Self: 'a,
    {
        SharedSpecification::new(self)
    }
}

impl<C: ?Sized, S: Specification<C>> SpecificationExt<C> for S {}

// Each combinator records its candidate type so that a composed tree is
// pinned to exactly one `C`, even when its leaves accept any candidate.
macro_rules! combinator_impls {
    ($name:ident { $($field:ident: $param:ident),+ }) => {
        impl<$($param,)+ C: ?Sized> Clone for $name<$($param,)+ C>
        where
            $($param: Clone,)+
        {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)+
                    candidate: PhantomData,
                }
            }
        }

        impl<$($param: Copy,)+ C: ?Sized> Copy for $name<$($param,)+ C> {}

        impl<$($param,)+ C: ?Sized> fmt::Debug for $name<$($param,)+ C>
        where
            $($param: fmt::Debug,)+
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    $(.field(&self.$field))+
                    .finish()
            }
        }

        impl<$($param,)+ C: ?Sized> PartialEq for $name<$($param,)+ C>
        where
            $($param: PartialEq,)+
        {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }

        impl<$($param: Eq,)+ C: ?Sized> Eq for $name<$($param,)+ C> {}
    };
}

/// AND combinator - both children must be satisfied.
pub struct And<L, R, C: ?Sized> {
    left: L,
    right: R,
    candidate: PhantomData<fn(&C) -> bool>,
}

impl<L, R, C: ?Sized> And<L, R, C> {
    /// Combine two specifications with AND.
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            candidate: PhantomData,
        }
    }

    /// The left-hand child.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The right-hand child.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R, C> Specification<C> for And<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

combinator_impls!(And { left: L, right: R });

/// OR combinator - at least one child must be satisfied.
pub struct Or<L, R, C: ?Sized> {
    left: L,
    right: R,
    candidate: PhantomData<fn(&C) -> bool>,
}

impl<L, R, C: ?Sized> Or<L, R, C> {
    /// Combine two specifications with OR.
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            candidate: PhantomData,
        }
    }

    /// The left-hand child.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The right-hand child.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R, C> Specification<C> for Or<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

combinator_impls!(Or { left: L, right: R });

/// NOT combinator - inverts its child.
pub struct Not<S, C: ?Sized> {
    inner: S,
    candidate: PhantomData<fn(&C) -> bool>,
}

impl<S, C: ?Sized> Not<S, C> {
    /// Negate a specification.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            candidate: PhantomData,
        }
    }

    /// The negated child.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, C> Specification<C> for Not<S, C>
where
    C: ?Sized,
    S: Specification<C>,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

combinator_impls!(Not { inner: S });

/// AND-NOT combinator - the left child must hold and the right must not.
pub struct AndNot<L, R, C: ?Sized> {
    left: L,
    right: R,
    candidate: PhantomData<fn(&C) -> bool>,
}

impl<L, R, C: ?Sized> AndNot<L, R, C> {
    /// Combine two specifications as `left AND NOT right`.
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            candidate: PhantomData,
        }
    }

    /// The child that must be satisfied.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The child that must not be satisfied.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R, C> Specification<C> for AndNot<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.left.is_satisfied_by(candidate) && !self.right.is_satisfied_by(candidate)
    }
}

combinator_impls!(AndNot { left: L, right: R });

/// OR-NOT combinator - the left child holds or the right does not.
pub struct OrNot<L, R, C: ?Sized> {
    left: L,
    right: R,
    candidate: PhantomData<fn(&C) -> bool>,
}

impl<L, R, C: ?Sized> OrNot<L, R, C> {
    /// Combine two specifications as `left OR NOT right`.
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            candidate: PhantomData,
        }
    }

    /// The child that satisfies the combinator on its own.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The child whose failure satisfies the combinator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R, C> Specification<C> for OrNot<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &C) -> bool {
        self.left.is_satisfied_by(candidate) || !self.right.is_satisfied_by(candidate)
    }
}

combinator_impls!(OrNot { left: L, right: R });

/// Create an AND combinator from two specifications.
///
/// Equivalent to `left.and(right)`.
pub fn and<C, L, R>(left: L, right: R) -> And<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    And::new(left, right)
}

/// Create an OR combinator from two specifications.
///
/// Equivalent to `left.or(right)`.
pub fn or<C, L, R>(left: L, right: R) -> Or<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    Or::new(left, right)
}

/// Create a NOT combinator from a specification.
///
/// Equivalent to `inner.not()`.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let empty = from_fn(|s: &str| s.is_empty());
/// assert!(not(empty).is_satisfied_by("hello"));
/// ```
pub fn not<C, S>(inner: S) -> Not<S, C>
where
    C: ?Sized,
    S: Specification<C>,
{
    Not::new(inner)
}

/// Create an AND-NOT combinator from two specifications.
///
/// Equivalent to `left.and_not(right)`.
pub fn and_not<C, L, R>(left: L, right: R) -> AndNot<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    AndNot::new(left, right)
}

/// Create an OR-NOT combinator from two specifications.
///
/// Equivalent to `left.or_not(right)`.
pub fn or_not<C, L, R>(left: L, right: R) -> OrNot<L, R, C>
where
    C: ?Sized,
    L: Specification<C>,
    R: Specification<C>,
{
    OrNot::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_fn;
    use crate::testing::Returning;

    #[test]
    fn test_and() {
        assert!(Returning(true).and(Returning(true)).is_satisfied_by("AnyValue"));
        assert!(!Returning(true).and(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(!Returning(false).and(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(!Returning(false).and(Returning(true)).is_satisfied_by("AnyValue"));
    }

    #[test]
    fn test_and_not() {
        assert!(!Returning(true).and_not(Returning(true)).is_satisfied_by("AnyValue"));
        assert!(Returning(true).and_not(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(!Returning(false).and_not(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(!Returning(false).and_not(Returning(true)).is_satisfied_by("AnyValue"));
    }

    #[test]
    fn test_or() {
        assert!(Returning(true).or(Returning(true)).is_satisfied_by("AnyValue"));
        assert!(Returning(true).or(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(!Returning(false).or(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(Returning(false).or(Returning(true)).is_satisfied_by("AnyValue"));
    }

    #[test]
    fn test_or_not() {
        assert!(Returning(true).or_not(Returning(true)).is_satisfied_by("AnyValue"));
        assert!(Returning(true).or_not(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(Returning(false).or_not(Returning(false)).is_satisfied_by("AnyValue"));
        assert!(!Returning(false).or_not(Returning(true)).is_satisfied_by("AnyValue"));
    }

    #[test]
    fn test_not() {
        assert!(!Returning(true).not().is_satisfied_by("AnyValue"));
        assert!(Returning(false).not().is_satisfied_by("AnyValue"));
    }

    #[test]
    fn test_free_functions_match_methods() {
        let candidates = [-3, 0, 4, 11];
        let even = from_fn(|n: &i32| n % 2 == 0);
        let positive = from_fn(|n: &i32| *n > 0);

        for n in &candidates {
            assert_eq!(
                and(even, positive).is_satisfied_by(n),
                even.and(positive).is_satisfied_by(n)
            );
            assert_eq!(
                or(even, positive).is_satisfied_by(n),
                even.or(positive).is_satisfied_by(n)
            );
            assert_eq!(
                and_not(even, positive).is_satisfied_by(n),
                even.and_not(positive).is_satisfied_by(n)
            );
            assert_eq!(
                or_not(even, positive).is_satisfied_by(n),
                even.or_not(positive).is_satisfied_by(n)
            );
            assert_eq!(not(even).is_satisfied_by(n), even.not().is_satisfied_by(n));
        }
    }

    #[test]
    fn test_methods_build_matching_variant() {
        let spec: And<_, _, str> = Returning(true).and(Returning(false));
        assert_eq!(spec, And::new(Returning(true), Returning(false)));
        assert_eq!(spec.left(), &Returning(true));
        assert_eq!(spec.right(), &Returning(false));

        let spec: OrNot<_, _, str> = Returning(false).or_not(Returning(true));
        assert_eq!(spec, OrNot::new(Returning(false), Returning(true)));

        let spec: Not<Returning, str> = Returning(true).not();
        assert_eq!(spec.inner(), &Returning(true));
    }

    #[test]
    fn test_complex_chain() {
        // (0 < x < 10 or x > 100), negated
        let p = from_fn(|x: &i32| *x > 0)
            .and(from_fn(|x: &i32| *x < 10))
            .or(from_fn(|x: &i32| *x > 100))
            .not();
        assert!(p.is_satisfied_by(&0));
        assert!(p.is_satisfied_by(&50));
        assert!(!p.is_satisfied_by(&5));
        assert!(!p.is_satisfied_by(&150));
    }

    #[test]
    fn test_composition_leaves_children_untouched() {
        let a = Returning(true);
        let b = Returning(false);

        let composed = (&a).and(&b);
        assert!(!composed.is_satisfied_by("x"));

        assert!(a.is_satisfied_by("x"));
        assert!(!b.is_satisfied_by("x"));
        assert_eq!(composed.left(), &&a);
    }

    #[test]
    fn test_boxed_and_arc_children() {
        let boxed: Box<dyn Specification<i32>> = Box::new(from_fn(|n: &i32| *n > 0));
        let arc = Arc::new(from_fn(|n: &i32| *n < 10));

        let spec = boxed.and(Arc::clone(&arc));
        assert!(spec.is_satisfied_by(&5));
        assert!(!spec.is_satisfied_by(&12));
        assert!(arc.is_satisfied_by(&5));
    }

    #[test]
    fn test_short_circuits() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let counted = from_fn(|_: &i32| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(!Returning(false).and(counted).is_satisfied_by(&1));
        assert!(Returning(true).or(counted).is_satisfied_by(&1));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_debug_output() {
        let spec: AndNot<_, _, str> = Returning(true).and_not(Returning(false));
        assert_eq!(
            format!("{:?}", spec),
            "AndNot(Returning(true), Returning(false))"
        );
    }
}
