//! Per-field rules for both forms
//!
//! Each `validate_*` function trims its input, checks one rule, and returns
//! either the accepted value or a single [`FieldError`]. The functions are
//! pure and independent; [`crate::form`] strings them together.
//!
//! ```
//! use bikeform::rules::{validate_age, AGE};
//! use bikeform::Validation;
//!
//! assert_eq!(validate_age(" 30 "), Validation::Success(30));
//! assert_eq!(validate_age("200"), Validation::Failure(vec![AGE.error()]));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

use crate::error::FieldError;
use crate::field::FieldValue;
use crate::parse;
use crate::predicate::{between, len_min, matches, not_empty, validate, Predicate};
use crate::Validation;

/// Minimum length of a name or surname, in UTF-16 code units as a browser
/// counts them.
pub const MIN_NAME_LEN: usize = 2;

/// Accepted ages, inclusive.
pub const AGE_RANGE: RangeInclusive<i64> = 0..=120;

/// Accepted declared bicycle prices, inclusive on both ends.
pub const PRICE_RANGE: RangeInclusive<f64> = 0.0..=60_000.0;

/// Minimal `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// dot somewhere after it with text on both sides.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// A field name paired with the message shown when its rule fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Form field the rule reads
    pub field: &'static str,
    /// Failure message
    pub message: &'static str,
}

impl Rule {
    /// The error reported when this rule fails
    pub const fn error(&self) -> FieldError {
        FieldError::new(self.field, self.message)
    }

    fn failure(&self) -> Vec<FieldError> {
        vec![self.error()]
    }
}

/// Registration: name.
pub const NAME: Rule = Rule {
    field: "name",
    message: "Name must be at least 2 characters long.",
};

/// Registration: surname.
pub const SURNAME: Rule = Rule {
    field: "surname",
    message: "Surname must be at least 2 characters long.",
};

/// Registration: age.
pub const AGE: Rule = Rule {
    field: "age",
    message: "Age must be between 0 and 120.",
};

/// Registration: email.
pub const EMAIL: Rule = Rule {
    field: "email",
    message: "Email address is not valid.",
};

/// Theft report: day of the theft.
pub const DAY: Rule = Rule {
    field: "day",
    message: "A day must be selected.",
};

/// Theft report: time of the theft.
pub const TIME: Rule = Rule {
    field: "time",
    message: "A time must be given.",
};

/// Theft report: declared price of the bicycle.
pub const PRICE: Rule = Rule {
    field: "price",
    message: "Price must be between 0 and 60000.",
};

/// Theft report: bicycle type.
pub const BIKE_TYPE: Rule = Rule {
    field: "bikeType",
    message: "A bicycle type must be selected.",
};

/// Registration rules in evaluation order.
pub const REGISTRATION_RULES: [Rule; 4] = [NAME, SURNAME, AGE, EMAIL];

/// Theft report rules in evaluation order.
pub const THEFT_REPORT_RULES: [Rule; 4] = [DAY, TIME, PRICE, BIKE_TYPE];

type Checked<T> = Validation<T, Vec<FieldError>>;

fn check_text<P>(raw: &str, predicate: P, rule: Rule) -> Checked<String>
where
    P: Predicate<str>,
{
    let value = FieldValue::new(raw);
    if predicate.check(value.as_str()) {
        Validation::success(value.into_string())
    } else {
        Validation::failure(rule.failure())
    }
}

/// Name: at least [`MIN_NAME_LEN`] characters once trimmed.
///
/// ```
/// use bikeform::rules::validate_name;
///
/// assert!(validate_name("Al").is_success());
/// assert!(validate_name(" A ").is_failure());
/// ```
pub fn validate_name(raw: &str) -> Checked<String> {
    check_text(raw, len_min(MIN_NAME_LEN), NAME)
}

/// Surname: at least [`MIN_NAME_LEN`] characters once trimmed.
pub fn validate_surname(raw: &str) -> Checked<String> {
    check_text(raw, len_min(MIN_NAME_LEN), SURNAME)
}

/// Age: the leading integer must lie in [`AGE_RANGE`].
///
/// Text after the number is ignored, so "30 years" is 30, and a `0x` prefix
/// reads the digits as hexadecimal. No leading digits at all fails the rule.
pub fn validate_age(raw: &str) -> Checked<u8> {
    let in_range = between(*AGE_RANGE.start(), *AGE_RANGE.end());
    parse::leading_int(&FieldValue::new(raw))
        .filter(|age| in_range.check(age))
        .and_then(|age| u8::try_from(age).ok())
        .map_or_else(|| Validation::failure(AGE.failure()), Validation::success)
}

/// Email: must match [`EMAIL_PATTERN`].
///
/// ```
/// use bikeform::rules::validate_email;
///
/// assert!(validate_email("al@go.com").is_success());
/// assert!(validate_email("a@b").is_failure());
/// assert!(validate_email("a b@c.com").is_failure());
/// ```
pub fn validate_email(raw: &str) -> Checked<String> {
    check_text(raw, matches(&EMAIL_REGEX), EMAIL)
}

/// Day: something must be selected.
pub fn validate_day(raw: &str) -> Checked<String> {
    check_text(raw, not_empty(), DAY)
}

/// Time: something must be entered.
pub fn validate_time(raw: &str) -> Checked<String> {
    check_text(raw, not_empty(), TIME)
}

/// Price: the whole value must be a number within [`PRICE_RANGE`].
///
/// Both bounds are accepted.
///
/// ```
/// use bikeform::rules::validate_price;
///
/// assert!(validate_price("0").is_success());
/// assert!(validate_price("60000").is_success());
/// assert!(validate_price("60001").is_failure());
/// assert!(validate_price("").is_failure());
/// ```
pub fn validate_price(raw: &str) -> Checked<f64> {
    let in_range = between(*PRICE_RANGE.start(), *PRICE_RANGE.end());
    match parse::number(&FieldValue::new(raw)) {
        Some(price) => validate(price, in_range, PRICE.failure()),
        None => Validation::failure(PRICE.failure()),
    }
}

/// Bicycle type: only the empty string is rejected.
///
/// The value is trimmed like every other field, so blank input ends up
/// empty and fails too.
pub fn validate_bike_type(raw: &str) -> Checked<String> {
    check_text(raw, not_empty(), BIKE_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_failure, assert_success, assert_validation_errors};

    #[test]
    fn test_email_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_name_boundary_is_two_chars() {
        assert_failure!(validate_name(""));
        assert_failure!(validate_name("A"));
        assert_success!(validate_name("Al"));
        assert_eq!(validate_name("  Ana  "), Validation::Success("Ana".to_string()));
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        assert_success!(validate_name("Ñu"));
        assert_failure!(validate_surname("É"));
        assert_success!(validate_name("𝒜"));
    }

    #[test]
    fn test_surname_reports_its_own_message() {
        assert_validation_errors!(validate_surname("G"), vec![SURNAME.error()]);
    }

    #[test]
    fn test_age_range_is_inclusive() {
        assert_eq!(validate_age("0"), Validation::Success(0));
        assert_eq!(validate_age("120"), Validation::Success(120));
        assert_validation_errors!(validate_age("-1"), vec![AGE.error()]);
        assert_validation_errors!(validate_age("121"), vec![AGE.error()]);
    }

    #[test]
    fn test_age_reads_leading_integer() {
        assert_eq!(validate_age("30 years"), Validation::Success(30));
        assert_eq!(validate_age("18.7"), Validation::Success(18));
        assert_failure!(validate_age("abc"));
        assert_failure!(validate_age(""));
        assert_failure!(validate_age("about 30"));
    }

    #[test]
    fn test_age_reads_hex_like_the_browser() {
        assert_eq!(validate_age("0x10"), Validation::Success(16));
        assert_validation_errors!(validate_age("0x7F"), vec![AGE.error()]);
        assert_validation_errors!(validate_age("0x"), vec![AGE.error()]);
    }

    #[test]
    fn test_email_shapes() {
        assert_success!(validate_email("a@b.co"));
        assert_success!(validate_email("first.last@sub.domain.org"));
        assert_failure!(validate_email("a@b"));
        assert_failure!(validate_email("a b@c.com"));
        assert_failure!(validate_email("@c.com"));
        assert_failure!(validate_email("a@@c.com"));
        assert_failure!(validate_email("a@c."));
        assert_failure!(validate_email("bad"));
    }

    #[test]
    fn test_email_is_trimmed_first() {
        assert_eq!(
            validate_email("  al@go.com "),
            Validation::Success("al@go.com".to_string())
        );
    }

    #[test]
    fn test_day_and_time_presence() {
        assert_success!(validate_day("Monday"));
        assert_success!(validate_time("14:00"));
        assert_validation_errors!(validate_day(""), vec![DAY.error()]);
        assert_validation_errors!(validate_time(""), vec![TIME.error()]);
    }

    #[test]
    fn test_blank_values_trim_to_empty() {
        assert_failure!(validate_day("   "));
        assert_failure!(validate_time("\t"));
        assert_failure!(validate_bike_type("  "));
    }

    // 0 and 60000 are both accepted: the bounds are inclusive.
    #[test]
    fn test_price_bounds_are_inclusive() {
        assert_eq!(validate_price("0"), Validation::Success(0.0));
        assert_eq!(validate_price("60000"), Validation::Success(60_000.0));
        assert_validation_errors!(validate_price("-1"), vec![PRICE.error()]);
        assert_validation_errors!(validate_price("60001"), vec![PRICE.error()]);
    }

    #[test]
    fn test_price_must_be_numeric() {
        assert_failure!(validate_price("cheap"));
        assert_failure!(validate_price("500 EUR"));
        assert_failure!(validate_price("NaN"));
        assert_failure!(validate_price("inf"));
        assert_eq!(validate_price(" 499.5 "), Validation::Success(499.5));
    }

    #[test]
    fn test_bike_type_accepts_any_text() {
        assert_success!(validate_bike_type("mountain"));
        assert_success!(validate_bike_type("x"));
        assert_validation_errors!(validate_bike_type(""), vec![BIKE_TYPE.error()]);
    }

    #[test]
    fn test_rule_tables_order() {
        let fields: Vec<&str> = REGISTRATION_RULES.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["name", "surname", "age", "email"]);
        let fields: Vec<&str> = THEFT_REPORT_RULES.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["day", "time", "price", "bikeType"]);
    }
}
