// Coercion edge cases that the inline unit tests do not cover: interaction
// between coercion and the comparison operators over realistic field data.

use rowsieve_core::{coerce_number, text_equal};
use rowsieve_query::{eval_condition, Operator};
use serde_json::json;

#[test]
fn test_thousands_separators_strip_before_parse() {
    assert_eq!(coerce_number(&json!("38,306")), Some(38306.0));
    assert_eq!(coerce_number(&json!("1,234,567.89")), Some(1234567.89));
}

#[test]
fn test_years_pattern_beats_generic_fallback() {
    // "196" appears after the years figure; the duration pattern must win.
    assert_eq!(coerce_number(&json!("20 years, 196 days")), Some(20.0));
    // Singular and mixed case both match.
    assert_eq!(coerce_number(&json!("1 Year, 300 days")), Some(1.0));
    // Without a years marker, the first number wins.
    assert_eq!(coerce_number(&json!("196 days")), Some(196.0));
}

#[test]
fn test_signed_and_fractional_fallback() {
    assert_eq!(coerce_number(&json!("gained -4.5 units")), Some(-4.5));
    assert_eq!(coerce_number(&json!("+12 net")), Some(12.0));
}

#[test]
fn test_whitespace_only_string_does_not_coerce() {
    assert_eq!(coerce_number(&json!("   ")), None);
}

#[test]
fn test_gender_token_requires_full_token_match() {
    // "mailed" strips to a token that is not in either set.
    assert!(!text_equal(&json!("mailed"), &json!("male")));
    // Punctuation and spacing are ignored.
    assert!(text_equal(&json!(" M. "), &json!("male")));
    assert!(text_equal(&json!("Wo-men"), &json!("F")));
}

#[test]
fn test_gender_overrides_plain_string_equality() {
    // Without canonicalization these are unequal strings.
    assert!(text_equal(&json!("men"), &json!("M")));
    // One side gendered, the other not: plain comparison applies.
    assert!(!text_equal(&json!("male"), &json!("mal")));
}

#[test]
fn test_comparison_operators_use_identical_coercion_on_both_sides() {
    let value = json!("30 years, 1 day");
    let expected = json!("29 years, 300 days");
    assert!(eval_condition(Some(&value), Operator::Gt, Some(&expected)));
    assert!(eval_condition(Some(&expected), Operator::Lt, Some(&value)));
}

#[test]
fn test_uncoercible_literal_fails_comparison() {
    assert!(!eval_condition(Some(&json!(30)), Operator::Gt, Some(&json!("old"))));
    assert!(!eval_condition(Some(&json!(30)), Operator::Lte, Some(&json!("old"))));
}

#[test]
fn test_boolean_values_do_not_coerce() {
    assert!(!eval_condition(Some(&json!(true)), Operator::Gt, Some(&json!(0))));
    assert!(!eval_condition(Some(&json!(false)), Operator::Lt, Some(&json!(1))));
}
