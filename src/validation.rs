//! Validation type for accumulating rule failures
//!
//! `Validation` looks like `Result`, but combining two of them keeps the
//! failures of both sides instead of stopping at the first. That is exactly
//! what a submitted form needs: the user sees every problem at once.
//!
//! # Examples
//!
//! ```
//! use bikeform::Validation;
//!
//! let name = Validation::<&str, Vec<&str>>::failure(vec!["name too short"]);
//! let age = Validation::<u8, Vec<&str>>::failure(vec!["age out of range"]);
//!
//! assert_eq!(
//!     name.and(age),
//!     Validation::Failure(vec!["name too short", "age out of range"])
//! );
//! ```
//!
//! ## Validating a whole form
//!
//! ```
//! use bikeform::{Validation, validation::ValidateAll};
//!
//! let result = (
//!     Validation::<_, Vec<&str>>::success("Al"),
//!     Validation::<_, Vec<&str>>::success("Go"),
//!     Validation::<_, Vec<&str>>::success(30u8),
//!     Validation::<_, Vec<&str>>::success("al@go.com"),
//! )
//!     .validate_all();
//!
//! assert_eq!(result, Validation::Success(("Al", "Go", 30, "al@go.com")));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The success value, discarding any errors
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// Both sides are always inspected. Left-hand errors come first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

/// Trait for combining the four field validations of a form
///
/// Every element is evaluated; errors are combined left to right.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

impl<E: Semigroup, A, B, C, D> ValidateAll<E>
    for (
        Validation<A, E>,
        Validation<B, E>,
        Validation<C, E>,
        Validation<D, E>,
    )
{
    type Output = (A, B, C, D);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b, c, d) = self;
        a.and(b)
            .and(c)
            .and(d)
            .map(|(((a, b), c), d)| (a, b, c, d))
    }
}
