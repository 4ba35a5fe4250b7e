//! Validation integration for predicates

use super::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use bikeform::{Validation, predicate::*};
///
/// let result = validate(500.0, between(0.0, 60_000.0), "price");
/// assert_eq!(result, Validation::success(500.0));
///
/// let result = validate(70_000.0, between(0.0, 60_000.0), "price");
/// assert_eq!(result, Validation::failure("price"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::between;

    #[test]
    fn test_validate_number() {
        let result = validate(30, between(0, 120), "age");
        assert_eq!(result, Validation::success(30));

        let result = validate(121, between(0, 120), "age");
        assert_eq!(result, Validation::failure("age"));
    }

    #[test]
    fn test_validate_keeps_float_bounds() {
        assert_eq!(
            validate(60_000.0, between(0.0, 60_000.0), "price"),
            Validation::success(60_000.0)
        );
        assert!(validate(f64::NAN, between(0.0, 60_000.0), "price").is_failure());
    }
}
