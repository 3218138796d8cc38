//! Operator sugar for composed specifications
//!
//! `a & b` and `a | b` build the same combinators as `a.and(b)` and
//! `a.or(b)`. Negation stays a method call, `.not()`, so that it never
//! competes with `std::ops::Not` when that trait is in scope. The left
//! operand has to be a type that records its candidate type, which means a
//! combinator or a [`SharedSpecification`]; start a chain with a method call
//! or `.shared()` when the left operand is a plain leaf.
//!
//! ```rust
//! use specification::prelude::*;
//!
//! let positive = from_fn(|n: &i32| *n > 0).shared();
//! let even = from_fn(|n: &i32| n % 2 == 0);
//! let big = from_fn(|n: &i32| *n > 1000);
//!
//! let spec = (positive & even) | big;
//! assert!(spec.is_satisfied_by(&4));
//! assert!(spec.is_satisfied_by(&1001));
//! assert!(spec.not().is_satisfied_by(&3));
//! ```

use std::ops;

use crate::combinators::{And, AndNot, Not, Or, OrNot, Specification};
use crate::shared::SharedSpecification;

macro_rules! impl_operators {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param,)+ C, Rhs> ops::BitAnd<Rhs> for $name<$($param,)+ C>
        where
            C: ?Sized,
            Self: Specification<C>,
            Rhs: Specification<C>,
        {
            type Output = And<Self, Rhs, C>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                And::new(self, rhs)
            }
        }

        impl<$($param,)+ C, Rhs> ops::BitOr<Rhs> for $name<$($param,)+ C>
        where
            C: ?Sized,
            Self: Specification<C>,
            Rhs: Specification<C>,
        {
            type Output = Or<Self, Rhs, C>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                Or::new(self, rhs)
            }
        }
    };
}

impl_operators!(And<L, R>);
impl_operators!(Or<L, R>);
impl_operators!(Not<S>);
impl_operators!(AndNot<L, R>);
impl_operators!(OrNot<L, R>);

impl<'a, C, Rhs> ops::BitAnd<Rhs> for SharedSpecification<'a, C>
where
    C: ?Sized,
    Rhs: Specification<C>,
{
    type Output = And<Self, Rhs, C>;

    fn bitand(self, rhs: Rhs) -> Self::Output {
        And::new(self, rhs)
    }
}

impl<'a, C, Rhs> ops::BitOr<Rhs> for SharedSpecification<'a, C>
where
    C: ?Sized,
    Rhs: Specification<C>,
{
    type Output = Or<Self, Rhs, C>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        Or::new(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::combinators::{Specification, SpecificationExt};
    use crate::testing::Returning;

    #[test]
    fn test_operators_match_methods() {
        for (a, b, c) in [
            (true, true, false),
            (true, false, true),
            (false, true, true),
            (false, false, false),
        ] {
            let (a, b, c) = (Returning(a), Returning(b), Returning(c));

            assert_eq!(
                (a.and(b) | c).is_satisfied_by("x"),
                a.and(b).or(c).is_satisfied_by("x")
            );
            assert_eq!(
                (a.or(b) & c).is_satisfied_by("x"),
                a.or(b).and(c).is_satisfied_by("x")
            );
            assert_eq!(
                (a.and_not(b).not() | c).is_satisfied_by("x"),
                a.and_not(b).not().or(c).is_satisfied_by("x")
            );
            assert_eq!(
                (a.or_not(b).not() & c).is_satisfied_by("x"),
                a.or_not(b).not().and(c).is_satisfied_by("x")
            );
        }
    }

    #[test]
    fn test_not_method_with_std_not_in_scope() {
        #[allow(unused_imports)]
        use std::ops::Not as _;

        let spec = Returning(true).and(Returning(true)).not();
        assert!(!spec.is_satisfied_by("x"));

        let spec = Returning(false).or(Returning(false)).not().not();
        assert!(!spec.is_satisfied_by(&0));

        let shared = Returning(false).shared().not();
        assert!(shared.is_satisfied_by("x"));
    }

    #[test]
    fn test_shared_operators() {
        let yes = Returning(true).shared();
        let no = Returning(false).shared();

        assert!((yes.clone() | no.clone()).is_satisfied_by("x"));
        assert!(!(yes.clone() & no.clone()).is_satisfied_by("x"));
        assert!((no.not() | yes.clone()).is_satisfied_by("x"));
        assert!(!(yes & Returning(false)).not().not().is_satisfied_by("x"));
    }
}
