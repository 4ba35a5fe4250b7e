//! Property-based checks of the field rules

use bikeform::rules::{validate_age, validate_name, validate_price};
use bikeform::{validate_form, FormFields, FormKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_names_shorter_than_two_units_fail(
        name in "\\PC{0,1}".prop_filter("at most one UTF-16 unit", |s| s.encode_utf16().count() < 2)
    ) {
        prop_assert!(validate_name(&name).is_failure());
    }

    #[test]
    fn prop_names_of_two_or_more_letters_pass(name in "[a-zA-Zà-ü]{2,40}") {
        prop_assert!(validate_name(&name).is_success());
    }

    #[test]
    fn prop_age_in_range_passes(age in 0i64..=120) {
        prop_assert_eq!(validate_age(&age.to_string()).ok(), Some(age as u8));
    }

    #[test]
    fn prop_age_out_of_range_fails(age in prop_oneof![i64::MIN..0, 121i64..i64::MAX]) {
        prop_assert!(validate_age(&age.to_string()).is_failure());
    }

    #[test]
    fn prop_hex_ages_follow_their_value(age in 0i64..=300) {
        let hex = format!("0x{:X}", age);
        prop_assert_eq!(validate_age(&hex).is_success(), age <= 120);
    }

    #[test]
    fn prop_price_in_range_passes(price in 0u32..=60_000) {
        prop_assert!(validate_price(&price.to_string()).is_success());
    }

    #[test]
    fn prop_price_above_range_fails(price in 60_001u64..10_000_000) {
        prop_assert!(validate_price(&price.to_string()).is_failure());
    }

    #[test]
    fn prop_validation_is_deterministic(
        pairs in prop::collection::vec(
            (
                prop::sample::select(vec![
                    "name", "surname", "age", "email", "day", "time", "price", "bikeType",
                ]),
                ".{0,12}",
            ),
            0..8,
        ),
        registration in any::<bool>(),
    ) {
        let fields: FormFields = pairs.into_iter().collect();
        let kind = if registration { FormKind::Registration } else { FormKind::TheftReport };

        let first = validate_form(kind, &fields);
        let second = validate_form(kind, &fields);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.valid, first.failures.is_empty());
        prop_assert!(first.failures.len() <= kind.rules().len());
    }
}
