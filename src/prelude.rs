//! Prelude for convenient imports
//!
//! This module re-exports the most commonly used specification types and functions.
//!
//! # Example
//!
//! ```rust
//! use specification::prelude::*;
//!
//! let valid_age = from_fn(|age: &i32| *age >= 0).and(from_fn(|age: &i32| *age <= 150));
//! assert!(valid_age.is_satisfied_by(&25));
//! ```

// Core traits
pub use crate::combinators::{Specification, SpecificationExt};

// Logical combinators
pub use crate::combinators::{and, and_not, not, or, or_not, And, AndNot, Not, Or, OrNot};
pub use crate::collection::{all_of, any_of, none_of};

// Leaves
pub use crate::constant::{always, never, FalseSpecification, TrueSpecification};
pub use crate::from_fn::from_fn;
pub use crate::shared::SharedSpecification;

// Guards
pub use crate::guard::{require, require_with};
