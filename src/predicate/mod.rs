//! Predicates behind the field rules
//!
//! A field rule is a predicate plus a failure message. [`validate`] turns a
//! predicate verdict into a `Validation`.
//!
//! # Example
//!
//! ```rust
//! use bikeform::{Validation, predicate::*};
//!
//! assert!(between(0, 120).check(&42));
//! assert!(len_min(2).check("Al"));
//!
//! let result = validate(30, between(0, 120), "age out of range");
//! assert_eq!(result, Validation::success(30));
//! ```

mod number;
mod string;
mod validation;

pub use number::{between, Between};

pub use string::{len_min, matches, not_empty, LenMin, Matches, NotEmpty};

pub use validation::validate;

/// A check over values of type T.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}
