//! Error types
//!
//! A failed rule is ordinary data ([`FieldError`]) collected inside a
//! [`Validation`](crate::Validation); it never propagates as a Rust error.
//! The one real error is an unrecognised form tag handed over by the caller.

use std::error::Error as StdError;
use std::fmt;

/// One failed field rule: which field, and the message to show the user.
///
/// ```
/// use bikeform::FieldError;
///
/// let err = FieldError::new("age", "Age must be between 0 and 120.");
/// assert_eq!(err.to_string(), "age: Age must be between 0 and 120.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    /// Name of the form field the rule applies to
    pub field: &'static str,
    /// Human-readable failure message
    pub message: &'static str,
}

impl FieldError {
    /// Create a field error
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl StdError for FieldError {}

/// Returned when a string names neither form.
///
/// ```
/// use bikeform::FormKind;
///
/// let err = "contact".parse::<FormKind>().unwrap_err();
/// assert_eq!(err.input(), "contact");
/// assert_eq!(
///     err.to_string(),
///     "unknown form kind 'contact' (expected 'registration' or 'theft-report')"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormKindError {
    input: String,
}

impl ParseFormKindError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, as given
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseFormKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown form kind '{}' (expected 'registration' or 'theft-report')",
            self.input
        )
    }
}

impl StdError for ParseFormKindError {}
