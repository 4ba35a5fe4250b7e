//! String predicates
//!
//! Lengths are counted in UTF-16 code units, the unit a browser reports for
//! a text control. Letters such as "Í" or "ñ" count once; characters outside
//! the Basic Multilingual Plane, such as "𝒜", count twice.

use regex::Regex;

use super::Predicate;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// Whitespace counts as content; trim beforehand if it should not.
///
/// ```rust
/// use bikeform::predicate::*;
///
/// assert!(not_empty().check("Monday"));
/// assert!(not_empty().check(" "));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks a minimum length.
#[derive(Clone, Copy, Debug)]
pub struct LenMin(usize);

impl Predicate<str> for LenMin {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.encode_utf16().count() >= self.0
    }
}

/// Create a predicate that checks if the length is at least min.
///
/// ```rust
/// use bikeform::predicate::*;
///
/// assert!(len_min(2).check("Al"));
/// assert!(len_min(2).check("Ñu"));
/// assert!(!len_min(2).check("A"));
/// ```
pub fn len_min(min: usize) -> LenMin {
    LenMin(min)
}

/// Predicate that checks a string against a regular expression.
///
/// Holds a reference so one compiled `Regex` can back many checks.
#[derive(Clone, Copy, Debug)]
pub struct Matches<'r>(&'r Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if a string matches `pattern`.
///
/// ```rust
/// use bikeform::predicate::*;
/// use regex::Regex;
///
/// let hh_mm = Regex::new(r"^\d{2}:\d{2}$").unwrap();
/// assert!(matches(&hh_mm).check("14:00"));
/// assert!(!matches(&hh_mm).check("2pm"));
/// ```
pub fn matches(pattern: &Regex) -> Matches<'_> {
    Matches(pattern)
}
