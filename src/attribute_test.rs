//! Tests for attribute construction

use super::{build_binary, build_numeric, build_string};
use crate::error::AppenderError;

// ============================================================================
// String attributes
// ============================================================================

#[test]
fn test_build_string_holds_textual_value() {
    let attr = build_string(Some("boom")).unwrap();
    assert_eq!(attr.as_s().unwrap(), "boom");
}

#[test]
fn test_build_string_absent_fails_null_input() {
    let err = build_string(None).unwrap_err();
    assert!(matches!(err, AppenderError::NullInput(_)));
}

#[test]
fn test_build_string_whitespace_fails_empty_input() {
    let err = build_string(Some("   \t")).unwrap_err();
    assert!(matches!(err, AppenderError::EmptyInput(_)));
}

#[test]
fn test_build_string_empty_fails_empty_input() {
    let err = build_string(Some("")).unwrap_err();
    assert!(matches!(err, AppenderError::EmptyInput(_)));
}

// ============================================================================
// Numeric attributes
// ============================================================================

#[test]
fn test_build_numeric_integer() {
    let attr = build_numeric(Some("42")).unwrap();
    assert_eq!(attr.as_n().unwrap(), "42");
    assert_eq!(attr.as_n().unwrap().parse::<i64>().unwrap(), 42);
}

#[test]
fn test_build_numeric_negative_float() {
    let attr = build_numeric(Some("-7.5")).unwrap();
    assert_eq!(attr.as_n().unwrap(), "-7.5");
}

#[test]
fn test_build_numeric_trims_whitespace() {
    let attr = build_numeric(Some(" 17 ")).unwrap();
    assert_eq!(attr.as_n().unwrap(), "17");
}

#[test]
fn test_build_numeric_rejects_text() {
    let err = build_numeric(Some("abc")).unwrap_err();
    assert!(matches!(err, AppenderError::NotNumeric(ref v) if v == "abc"));
}

#[test]
fn test_build_numeric_rejects_non_finite() {
    assert!(matches!(
        build_numeric(Some("inf")).unwrap_err(),
        AppenderError::NotNumeric(_)
    ));
    assert!(matches!(
        build_numeric(Some("NaN")).unwrap_err(),
        AppenderError::NotNumeric(_)
    ));
}

#[test]
fn test_build_numeric_absent_fails_null_input() {
    let err = build_numeric(None).unwrap_err();
    assert!(matches!(err, AppenderError::NullInput(_)));
}

// ============================================================================
// Binary attributes
// ============================================================================

#[test]
fn test_build_binary_wraps_bytes() {
    let attr = build_binary(Some(&[1, 2, 3])).unwrap();
    assert_eq!(attr.as_b().unwrap().as_ref(), &[1, 2, 3]);
}

#[test]
fn test_build_binary_absent_fails_null_input() {
    let err = build_binary(None).unwrap_err();
    assert!(matches!(err, AppenderError::NullInput(_)));
}
