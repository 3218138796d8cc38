//! Guard integration for specifications
//!
//! Evaluation itself never fails. These helpers sit at the edge of a caller's
//! code and turn an unsatisfied specification into an `Err` of the caller's
//! choosing, so rules compose with `?`.

use crate::combinators::Specification;

/// Require a value to satisfy a specification.
///
/// Returns `Ok(value)` if the specification is satisfied,
/// otherwise returns `Err(error)`.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let non_blank = from_fn(|s: &String| !s.trim().is_empty());
///
/// assert_eq!(require(String::from("hello"), &non_blank, "blank"), Ok(String::from("hello")));
/// assert_eq!(require(String::from("  "), &non_blank, "blank"), Err("blank"));
/// ```
pub fn require<T, E, S>(value: T, specification: S, error: E) -> Result<T, E>
where
    S: Specification<T>,
{
    if specification.is_satisfied_by(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Require a value to satisfy a specification, building the error lazily.
///
/// Like [`require`], but takes a closure to generate the error,
/// allowing access to the rejected value when constructing it.
///
/// # Example
///
/// ```rust
/// use specification::prelude::*;
///
/// let result = require_with(7u32, from_fn(|n: &u32| n % 2 == 0), |n| {
///     format!("{} is odd", n)
/// });
/// assert_eq!(result, Err("7 is odd".to_string()));
/// ```
pub fn require_with<T, E, S, F>(value: T, specification: S, error_fn: F) -> Result<T, E>
where
    S: Specification<T>,
    F: FnOnce(&T) -> E,
{
    if specification.is_satisfied_by(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
