//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, Position(42));

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::UnexpectedEndOfInput, "UnexpectedEndOfInput"),
        (
            ErrorImpl::UnexpectedToken {
                token: "2".to_string(),
            },
            "UnexpectedToken",
        ),
        (
            ErrorImpl::MalformedNumberLiteral {
                literal: "99999999999999999999".to_string(),
            },
            "MalformedNumberLiteral",
        ),
        (
            ErrorImpl::ArithmeticOverflow {
                operation: "addition".to_string(),
            },
            "ArithmeticOverflow",
        ),
        (ErrorImpl::TooDeeplyNested { limit: 8 }, "TooDeeplyNested"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, Position::null()).get_error_name(), name);
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '*' },
        Position(2),
    );

    assert_eq!(error.to_string(), "unrecognised character: '*' at position 2");

    let error = Error::new(ErrorImpl::TooDeeplyNested { limit: 4 }, Position(7));
    assert_eq!(
        error.to_string(),
        "expression nested deeper than 4 levels at position 7"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MalformedNumberLiteral {
            literal: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("99999999999999999999")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
