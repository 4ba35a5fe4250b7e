//! The two forms and the dispatch between them
//!
//! [`Registration`] and [`TheftReport`] run their rule sets over a
//! [`FormFields`] snapshot and hand back a typed record on success. Shells
//! that only need a yes/no plus messages go through [`FormValidator`], which
//! picks the rule set from a [`FormKind`] and flattens the outcome into a
//! [`ValidationResult`].
//!
//! ```
//! use bikeform::{validate_form, FormFields, FormKind};
//!
//! let fields: FormFields = [
//!     ("name", "A"),
//!     ("surname", "Go"),
//!     ("age", "200"),
//!     ("email", "bad"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = validate_form(FormKind::Registration, &fields);
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.messages(),
//!     vec![
//!         "Name must be at least 2 characters long.",
//!         "Age must be between 0 and 120.",
//!         "Email address is not valid.",
//!     ]
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{FieldError, ParseFormKindError};
use crate::field::FormFields;
use crate::rules::{
    self, validate_age, validate_bike_type, validate_day, validate_email, validate_name,
    validate_price, validate_surname, validate_time, Rule,
};
use crate::validation::ValidateAll;
use crate::Validation;

/// Which form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FormKind {
    /// Cyclist registration form
    Registration,
    /// Bicycle theft report form
    TheftReport,
}

impl FormKind {
    /// Every form kind
    pub const ALL: [FormKind; 2] = [FormKind::Registration, FormKind::TheftReport];

    /// Machine tag: `registration` or `theft-report`
    pub fn tag(self) -> &'static str {
        match self {
            FormKind::Registration => "registration",
            FormKind::TheftReport => "theft-report",
        }
    }

    /// Wording used in user-facing summaries
    pub fn label(self) -> &'static str {
        match self {
            FormKind::Registration => "registration",
            FormKind::TheftReport => "theft report",
        }
    }

    /// The rules of this form, in evaluation order
    pub fn rules(self) -> &'static [Rule] {
        match self {
            FormKind::Registration => &rules::REGISTRATION_RULES,
            FormKind::TheftReport => &rules::THEFT_REPORT_RULES,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FormKind {
    type Err = ParseFormKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseFormKindError::new(s))
    }
}

/// An accepted registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Trimmed first name
    pub name: String,
    /// Trimmed surname
    pub surname: String,
    /// Age in years, 0 to 120
    pub age: u8,
    /// Trimmed email address
    pub email: String,
}

impl Registration {
    /// Run all four registration rules.
    ///
    /// Every rule is evaluated; failures come back in rule order.
    pub fn validate(fields: &FormFields) -> Validation<Self, Vec<FieldError>> {
        (
            validate_name(&fields.get(rules::NAME.field)),
            validate_surname(&fields.get(rules::SURNAME.field)),
            validate_age(&fields.get(rules::AGE.field)),
            validate_email(&fields.get(rules::EMAIL.field)),
        )
            .validate_all()
            .map(|(name, surname, age, email)| Registration {
                name,
                surname,
                age,
                email,
            })
    }
}

/// An accepted theft report.
#[derive(Debug, Clone, PartialEq)]
pub struct TheftReport {
    /// Day of the theft, as selected
    pub day: String,
    /// Time of the theft, as entered
    pub time: String,
    /// Declared price of the bicycle
    pub price: f64,
    /// Bicycle type, as selected
    pub bike_type: String,
}

impl TheftReport {
    /// Run all four theft report rules.
    ///
    /// A snapshot without a `price` field is judged like one with an empty
    /// price, so it fails the price rule.
    ///
    /// ```
    /// use bikeform::{FormFields, TheftReport};
    ///
    /// let fields = FormFields::new()
    ///     .with("day", "Monday")
    ///     .with("time", "14:00")
    ///     .with("price", "500")
    ///     .with("bikeType", "road");
    /// let report = TheftReport::validate(&fields).into_result().unwrap();
    /// assert_eq!(report.price, 500.0);
    /// ```
    pub fn validate(fields: &FormFields) -> Validation<Self, Vec<FieldError>> {
        (
            validate_day(&fields.get(rules::DAY.field)),
            validate_time(&fields.get(rules::TIME.field)),
            validate_price(&fields.get(rules::PRICE.field)),
            validate_bike_type(&fields.get(rules::BIKE_TYPE.field)),
        )
            .validate_all()
            .map(|(day, time, price, bike_type)| TheftReport {
                day,
                time,
                price,
                bike_type,
            })
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    /// True iff every applicable rule passed
    pub valid: bool,
    /// Failed rules, in evaluation order
    pub failures: Vec<FieldError>,
}

impl ValidationResult {
    /// Flatten a typed validation, dropping the success value
    pub fn from_validation<T>(validation: Validation<T, Vec<FieldError>>) -> Self {
        match validation {
            Validation::Success(_) => ValidationResult {
                valid: true,
                failures: Vec::new(),
            },
            Validation::Failure(failures) => ValidationResult {
                valid: failures.is_empty(),
                failures,
            },
        }
    }

    /// Whether the submission may go ahead
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failure messages, in evaluation order
    pub fn messages(&self) -> Vec<&'static str> {
        self.failures.iter().map(|f| f.message).collect()
    }

    /// Names of the fields that failed, in evaluation order
    pub fn fields(&self) -> Vec<&'static str> {
        self.failures.iter().map(|f| f.field).collect()
    }

    /// The closing notice for the whole form.
    ///
    /// ```
    /// use bikeform::{validate_form, FormFields, FormKind};
    ///
    /// let result = validate_form(FormKind::TheftReport, &FormFields::new());
    /// assert_eq!(result.summary(FormKind::TheftReport), "Please review the theft report form.");
    /// ```
    pub fn summary(&self, kind: FormKind) -> String {
        if self.valid {
            format!("The {} form was submitted successfully.", kind.label())
        } else {
            format!("Please review the {} form.", kind.label())
        }
    }
}

impl<T> From<Validation<T, Vec<FieldError>>> for ValidationResult {
    fn from(validation: Validation<T, Vec<FieldError>>) -> Self {
        ValidationResult::from_validation(validation)
    }
}

/// Runs the rule set of a form kind over a snapshot.
///
/// Stateless; one value can serve any number of callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Create a validator
    pub fn new() -> Self {
        FormValidator
    }

    /// Validate `fields` as a form of kind `kind`
    pub fn validate(&self, kind: FormKind, fields: &FormFields) -> ValidationResult {
        let result = match kind {
            FormKind::Registration => ValidationResult::from(Registration::validate(fields)),
            FormKind::TheftReport => ValidationResult::from(TheftReport::validate(fields)),
        };

        #[cfg(feature = "tracing")]
        {
            for failure in &result.failures {
                tracing::trace!(form = %kind, field = failure.field, "rule failed");
            }
            tracing::debug!(
                form = %kind,
                valid = result.valid,
                failures = result.failures.len(),
                "validated submission"
            );
        }

        result
    }
}

/// Validate `fields` as a form of kind `kind`.
///
/// Shorthand for `FormValidator::new().validate(kind, fields)`.
pub fn validate_form(kind: FormKind, fields: &FormFields) -> ValidationResult {
    FormValidator::new().validate(kind, fields)
}
