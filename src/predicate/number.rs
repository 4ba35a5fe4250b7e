//! Number predicates

use super::Predicate;

/// Predicate for value in range (inclusive on both ends).
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// NaN is never in range.
///
/// ```rust
/// use bikeform::predicate::*;
///
/// let price = between(0.0, 60_000.0);
/// assert!(price.check(&0.0));
/// assert!(price.check(&60_000.0));
/// assert!(!price.check(&60_000.5));
/// assert!(!price.check(&f64::NAN));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}
