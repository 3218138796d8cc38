//! # Specification
//!
//! > *"Say what you mean, once"*
//!
//! A Rust library for expressing business rules and filters as composable
//! values: the Specification pattern.
//!
//! ## Philosophy
//!
//! A rule such as "an active customer who is not in arrears" should be a
//! value you can name, test, share and combine, not an `if` expression copied
//! into every call site.
//!
//! - Implement [`Specification<C>`] (or wrap a closure with [`from_fn`]) and
//!   supply only `is_satisfied_by`.
//! - Combine with `and`, `and_not`, `or`, `or_not` and `not` from
//!   [`SpecificationExt`]. Composition always builds a new value.
//! - Evaluation is pure and total, so a composed rule can be evaluated from
//!   any number of threads at once.
//!
//! ## Quick Example
//!
//! ```rust
//! use specification::prelude::*;
//!
//! struct Customer {
//!     active: bool,
//!     balance: i64,
//! }
//!
//! struct Active;
//!
//! impl Specification<Customer> for Active {
//!     fn is_satisfied_by(&self, customer: &Customer) -> bool {
//!         customer.active
//!     }
//! }
//!
//! let in_arrears = from_fn(|c: &Customer| c.balance < 0);
//! let eligible = Active.and_not(in_arrears);
//!
//! assert!(eligible.is_satisfied_by(&Customer { active: true, balance: 10 }));
//! assert!(!eligible.is_satisfied_by(&Customer { active: true, balance: -5 }));
//! assert!(!eligible.is_satisfied_by(&Customer { active: false, balance: 10 }));
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: adds `SpecificationTracingExt::traced`, which emits a `TRACE`
//!   event for each evaluation.
//! - `proptest`: implements `proptest::arbitrary::Arbitrary` for
//!   [`testing::Returning`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod collection;
mod combinators;
mod constant;
mod from_fn;
mod guard;
mod ops;
mod shared;

pub mod prelude;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-export core traits
pub use combinators::{Specification, SpecificationExt};

// Re-export combinator types
pub use collection::{all_of, any_of, none_of, AllOf, AnyOf, NoneOf};
pub use combinators::{and, and_not, not, or, or_not, And, AndNot, Not, Or, OrNot};

// Re-export leaves
pub use constant::{always, never, FalseSpecification, TrueSpecification};
pub use from_fn::{from_fn, FromFn};
pub use shared::SharedSpecification;

// Re-export guard integration
pub use guard::{require, require_with};
