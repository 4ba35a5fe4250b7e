//! Testing helpers
//!
//! Assertion macros for [`Validation`](crate::Validation) values, and, with
//! the `proptest` feature, strategies that generate well-formed form
//! snapshots.
//!
//! ```rust
//! use bikeform::rules::{validate_age, validate_name, AGE};
//! use bikeform::{assert_failure, assert_success, assert_validation_errors};
//!
//! assert_success!(validate_name("Al"));
//! assert_failure!(validate_name("A"));
//! assert_validation_errors!(validate_age("121"), vec![AGE.error()]);
//! ```

/// Assert that a validation succeeds.
///
/// Panics with the accumulated errors if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// Panics with the success value if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given errors, in order.
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Strategies producing snapshots that every rule accepts.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::{FormFields, FormKind};

    /// A registration snapshot that passes all four rules
    pub fn valid_registration() -> impl Strategy<Value = FormFields> {
        (
            "[A-Za-zÀ-ÿ]{2,20}",
            "[A-Za-zÀ-ÿ]{2,20}",
            0u8..=120,
            "[a-z0-9._]{1,12}@[a-z0-9]{1,12}\\.[a-z]{2,6}",
        )
            .prop_map(|(name, surname, age, email)| {
                FormFields::new()
                    .with("name", name)
                    .with("surname", surname)
                    .with("age", age.to_string())
                    .with("email", email)
            })
    }

    /// A theft report snapshot that passes all four rules
    pub fn valid_theft_report() -> impl Strategy<Value = FormFields> {
        (
            prop::sample::select(vec![
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
            (0u8..24, 0u8..60),
            0u32..=60_000,
            "[a-z]{1,12}",
        )
            .prop_map(|(day, (hour, minute), price, bike_type)| {
                FormFields::new()
                    .with("day", day)
                    .with("time", format!("{:02}:{:02}", hour, minute))
                    .with("price", price.to_string())
                    .with("bikeType", bike_type)
            })
    }

    /// Either form kind
    pub fn form_kind() -> impl Strategy<Value = FormKind> {
        prop::sample::select(FormKind::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::Validation;

    #[test]
    fn assert_success_macro() {
        let val = Validation::<_, Vec<String>>::success(42);
        assert_success!(val);
    }

    #[test]
    fn assert_failure_macro() {
        let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
        assert_failure!(val);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
        assert_validation_errors!(val, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Validation::<_, Vec<String>>::success(42);
        assert_failure!(val);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::strategies::*;
        use crate::{validate_form, FormKind};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_registrations_are_valid(fields in valid_registration()) {
                prop_assert!(validate_form(FormKind::Registration, &fields).is_valid());
            }

            #[test]
            fn generated_theft_reports_are_valid(fields in valid_theft_report()) {
                prop_assert!(validate_form(FormKind::TheftReport, &fields).is_valid());
            }
        }
    }
}
