//! # Int-or-Percent Validation Tests
//!
//! Table-driven cases for every public check, plus properties over the
//! integer domain.
//!
//! ## Test Categories
//!
//! 1. **Percent extraction** - int form, malformed and valid strings
//! 2. **Non-negative check** - sign and zero handling
//! 3. **100% cap** - absent vs. empty vs. violation
//! 4. **Composite validator** - three-way dispatch
//! 5. **Properties** - every integer, idempotence

use lws_rollout_validation::domain::messages::invalid_percent_detail;
use lws_rollout_validation::{
    check_non_negative, check_not_over_hundred_percent, extract_percent,
    validate_positive_int_or_percent,
};
use lws_types::{BadValue, ErrorList, ErrorType, FieldError, FieldPath, IntOrString};
use proptest::prelude::*;

// =============================================================================
// TEST HELPERS
// =============================================================================

fn test_path() -> FieldPath {
    FieldPath::new("test")
}

fn invalid(bad_value: BadValue, detail: &str) -> FieldError {
    FieldError {
        error_type: ErrorType::Invalid,
        field: test_path(),
        bad_value,
        detail: detail.to_string(),
    }
}

fn int(v: i64) -> IntOrString {
    IntOrString::from_tagged(0, v, "")
}

fn string(s: &str) -> IntOrString {
    IntOrString::from_tagged(1, 0, s)
}

// =============================================================================
// PERCENT EXTRACTION
// =============================================================================

#[test]
fn test_extract_percent_table() {
    let cases: &[(&str, IntOrString, Option<i64>)] = &[
        ("input type int", int(1), None),
        ("input type string - invalid format", string("1"), None),
        ("input type string - empty", string(""), None),
        ("input type string - valid format", string("1%"), Some(1)),
        ("input type string - above 100", string("101%"), Some(101)),
        ("input type string - zero", string("0%"), Some(0)),
    ];

    for (name, input, want) in cases {
        assert_eq!(extract_percent(input), *want, "{}", name);
    }
}

// =============================================================================
// NON-NEGATIVE CHECK
// =============================================================================

#[test]
fn test_check_non_negative_table() {
    let cases: Vec<(&str, i64, bool, ErrorList)> = vec![
        (
            "input less than 0",
            -1,
            false,
            vec![invalid(BadValue::Int(-1), "must be grater than 0")].into(),
        ),
        (
            "input equal to 0",
            0,
            false,
            vec![invalid(BadValue::Int(0), "must be grater than 0")].into(),
        ),
        ("input equal to 0 when zero is allowed", 0, true, ErrorList::new()),
        ("input greater than 0", 1, false, ErrorList::new()),
    ];

    for (name, input, allow_zero, want) in cases {
        assert_eq!(
            check_non_negative(input, &test_path(), allow_zero),
            want,
            "{}",
            name
        );
    }
}

// =============================================================================
// 100% CAP
// =============================================================================

#[test]
fn test_check_not_over_hundred_percent_table() {
    let cases: Vec<(&str, IntOrString, Option<ErrorList>)> = vec![
        ("int input is not applicable", int(1), None),
        (
            "greater than 100",
            string("101%"),
            Some(
                vec![invalid(
                    BadValue::IntOrString(string("101%")),
                    "must not be greater than 100%",
                )]
                .into(),
            ),
        ),
        ("less than 100", string("99%"), Some(ErrorList::new())),
        ("equal to 100", string("100%"), Some(ErrorList::new())),
    ];

    for (name, input, want) in cases {
        assert_eq!(
            check_not_over_hundred_percent(&input, &test_path()),
            want,
            "{}",
            name
        );
    }
}

#[test]
fn test_hundred_percent_violation_does_not_carry_parsed_integer() {
    let errs = check_not_over_hundred_percent(&string("101%"), &test_path()).unwrap();
    assert_ne!(errs.as_slice()[0].bad_value, BadValue::Int(101));
}

// =============================================================================
// COMPOSITE VALIDATOR
// =============================================================================

#[test]
fn test_validate_positive_int_or_percent_table() {
    let cases: Vec<(&str, IntOrString, bool, ErrorList)> = vec![
        ("int - positive", int(1), false, ErrorList::new()),
        (
            "int - negative",
            int(-1),
            false,
            vec![invalid(BadValue::Int(-1), "must be grater than 0")].into(),
        ),
        ("int - zero", int(0), true, ErrorList::new()),
        ("percent - greater than 100", string("101%"), false, ErrorList::new()),
        ("percent - less than 100", string("99%"), false, ErrorList::new()),
        (
            "percent - invalid string",
            string("invalid"),
            false,
            vec![invalid(
                BadValue::IntOrString(string("invalid")),
                &invalid_percent_detail(),
            )]
            .into(),
        ),
        (
            "invalid input",
            IntOrString::from_tagged(2, 0, ""),
            false,
            vec![invalid(
                BadValue::IntOrString(IntOrString::Unrecognized(2)),
                "must be an integer or percentage (e.g '5%%')",
            )]
            .into(),
        ),
    ];

    for (name, input, allow_zero, want) in cases {
        assert_eq!(
            validate_positive_int_or_percent(&input, &test_path(), allow_zero),
            want,
            "{}",
            name
        );
    }
}

#[test]
fn test_invalid_percent_detail_text() {
    let errs = validate_positive_int_or_percent(&string("invalid"), &test_path(), false);
    assert_eq!(
        errs.as_slice()[0].detail,
        "a valid percent string must be a numeric string followed by an ending '%' \
         (e.g. '1%',  or '93%', regex used for validation is '[0-9]+%')"
    );
}

#[test]
fn test_errors_collapse_into_result() {
    let path = FieldPath::new("spec").child("maxSurge");
    let errs = validate_positive_int_or_percent(&int(-3), &path, false);
    let err = errs.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "1 validation error(s): spec.maxSurge: Invalid value: -3: must be grater than 0"
    );
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_positive_ints_always_pass(n in 1i64..=i64::MAX, allow_zero in any::<bool>()) {
        prop_assert!(check_non_negative(n, &test_path(), allow_zero).is_empty());
        prop_assert!(validate_positive_int_or_percent(&int(n), &test_path(), allow_zero).is_empty());
    }

    #[test]
    fn prop_negative_ints_yield_one_error(n in i64::MIN..0i64, allow_zero in any::<bool>()) {
        let errs = check_non_negative(n, &test_path(), allow_zero);
        prop_assert_eq!(errs, ErrorList::from(invalid(BadValue::Int(n), "must be grater than 0")));
    }

    #[test]
    fn prop_int_form_never_has_a_percent(n in any::<i64>()) {
        prop_assert_eq!(extract_percent(&int(n)), None);
        prop_assert_eq!(check_not_over_hundred_percent(&int(n), &test_path()), None);
    }

    #[test]
    fn prop_percent_strings_round_trip(p in 0i64..100_000) {
        let value = string(&format!("{}%", p));
        prop_assert_eq!(extract_percent(&value), Some(p));

        let capped = check_not_over_hundred_percent(&value, &test_path()).unwrap();
        prop_assert_eq!(capped.is_empty(), p <= 100);
        prop_assert!(validate_positive_int_or_percent(&value, &test_path(), false).is_empty());
    }

    #[test]
    fn prop_checks_are_idempotent(s in "\\PC{0,8}", allow_zero in any::<bool>()) {
        let value = string(&s);
        prop_assert_eq!(
            validate_positive_int_or_percent(&value, &test_path(), allow_zero),
            validate_positive_int_or_percent(&value, &test_path(), allow_zero)
        );
        prop_assert_eq!(
            check_not_over_hundred_percent(&value, &test_path()),
            check_not_over_hundred_percent(&value, &test_path())
        );
    }
}
