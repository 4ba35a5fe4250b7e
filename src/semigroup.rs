//! Semigroup trait for accumulating rule failures
//!
//! Every rule in this crate is evaluated, even after an earlier one has
//! failed. The failures have to be merged somewhere, and `Semigroup` is that
//! merge: an associative `combine` that keeps left-hand items first, so the
//! accumulated list stays in rule-evaluation order.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use bikeform::Semigroup;
//!
//! let first = vec!["name"];
//! let second = vec!["age", "email"];
//! assert_eq!(first.combine(second), vec!["name", "age", "email"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value; clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
