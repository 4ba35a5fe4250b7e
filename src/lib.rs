//! # bikeform
//!
//! Validation rules for two web forms: a cyclist **registration** form and a
//! **bicycle theft report** form.
//!
//! The crate is the pure core only. Whoever owns the page collects the raw
//! field values, hands them over as a [`FormFields`] snapshot, and decides
//! how to show the [`ValidationResult`] that comes back. Every rule runs on
//! every submission, so the user sees all problems at once, in rule order.
//!
//! ## Quick Example
//!
//! ```rust
//! use bikeform::{validate_form, FormFields, FormKind};
//!
//! let fields: FormFields = [
//!     ("day", "Monday"),
//!     ("time", "14:00"),
//!     ("price", "500"),
//!     ("bikeType", "mountain"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = validate_form(FormKind::TheftReport, &fields);
//! assert!(result.is_valid());
//! assert_eq!(
//!     result.summary(FormKind::TheftReport),
//!     "The theft report form was submitted successfully."
//! );
//! ```
//!
//! ## Typed results
//!
//! ```rust
//! use bikeform::{FormFields, Registration, Validation};
//!
//! let fields = FormFields::new()
//!     .with("name", "Al")
//!     .with("surname", "Go")
//!     .with("age", "30")
//!     .with("email", "al@go.com");
//!
//! match Registration::validate(&fields) {
//!     Validation::Success(user) => assert_eq!(user.age, 30),
//!     Validation::Failure(errors) => panic!("unexpected: {:?}", errors),
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialization of snapshots, form kinds and results
//! - `tracing`: debug/trace events from [`FormValidator`]
//! - `proptest`: strategies in [`testing::strategies`] for well-formed input

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod field;
pub mod form;
pub mod parse;
pub mod predicate;
pub mod rules;
pub mod semigroup;
pub mod validation;

pub mod testing;

// Re-exports
pub use error::{FieldError, ParseFormKindError};
pub use field::{FieldValue, FormFields};
pub use form::{
    validate_form, FormKind, FormValidator, Registration, TheftReport, ValidationResult,
};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FieldError, ParseFormKindError};
    pub use crate::field::{FieldValue, FormFields};
    pub use crate::form::{
        validate_form, FormKind, FormValidator, Registration, TheftReport, ValidationResult,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{ValidateAll, Validation};
}
