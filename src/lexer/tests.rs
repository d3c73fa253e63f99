//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Integer literals
//! - Operators
//! - Whitespace handling
//! - Cursor bookkeeping (positions, rewind, reset)
//! - Error cases

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{OperatorKind, Token},
};
use crate::{errors::errors::ErrorImpl, parser::lookups::lookup_operator, Position};

fn op(kind: OperatorKind) -> Token {
    Token::Operator(lookup_operator(kind).unwrap())
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100 007").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::Number(42),
            Token::Number(0),
            Token::Number(100),
            Token::Number(7),
            Token::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ -").unwrap();

    assert_eq!(
        tokens,
        vec![op(OperatorKind::Plus), op(OperatorKind::Dash), Token::EOF]
    );
}

#[test]
fn test_tokenize_mixed_expression() {
    let tokens = tokenize("2+3-+4").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::Number(2),
            op(OperatorKind::Plus),
            Token::Number(3),
            op(OperatorKind::Dash),
            op(OperatorKind::Plus),
            Token::Number(4),
            Token::EOF,
        ]
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize(" \t 1 \r\n +\n\n2  ").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::Number(1),
            op(OperatorKind::Plus),
            Token::Number(2),
            Token::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(tokenize("").unwrap(), vec![Token::EOF]);
    assert_eq!(tokenize("   \n").unwrap(), vec![Token::EOF]);
}

#[test]
fn test_eof_is_repeatable() {
    let mut lexer = Lexer::new("1");

    assert_eq!(lexer.next_token().unwrap(), Token::Number(1));
    assert_eq!(lexer.next_token().unwrap(), Token::EOF);
    assert_eq!(lexer.next_token().unwrap(), Token::EOF);
}

#[test]
fn test_operator_binding_powers() {
    let plus = op(OperatorKind::Plus);

    assert_eq!(plus.left_bp().0, 100);
    assert!(plus.right_bp() >= plus.left_bp());
    assert_eq!(Token::EOF.left_bp().0, 0);
    assert_eq!(Token::EOF.right_bp().0, 0);
    assert_eq!(Token::Number(5).left_bp().0, 0);
}

#[test]
fn test_token_display() {
    assert_eq!(Token::EOF.to_string(), "EOF");
    assert_eq!(Token::Number(12).to_string(), "12");
    assert_eq!(op(OperatorKind::Plus).to_string(), "+");
    assert_eq!(op(OperatorKind::Dash).to_string(), "-");
}

#[test]
fn test_token_positions() {
    let mut lexer = Lexer::new("  12 + 3");

    assert_eq!(lexer.next_token().unwrap(), Token::Number(12));
    assert_eq!(lexer.get_position(), Position(2));
    assert_eq!(lexer.get_last_position(), Position(3));

    assert_eq!(lexer.next_token().unwrap(), op(OperatorKind::Plus));
    assert_eq!(lexer.get_position(), Position(5));

    assert_eq!(lexer.next_token().unwrap(), Token::Number(3));
    assert_eq!(lexer.next_token().unwrap(), Token::EOF);
    assert_eq!(lexer.get_position(), Position(8));
}

#[test]
fn test_rewind_and_reset() {
    let mut lexer = Lexer::new("1 + 2");
    while !lexer.next_token().unwrap().is_eof() {}

    lexer.rewind();
    assert_eq!(lexer.next_token().unwrap(), Token::Number(1));

    lexer.reset("9");
    assert_eq!(lexer.source(), "9");
    assert_eq!(lexer.next_token().unwrap(), Token::Number(9));
    assert_eq!(lexer.next_token().unwrap(), Token::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("1 * 2").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '*' }
    );
    assert_eq!(error.get_position(), &Position(2));
}

#[test]
fn test_tokenize_unrecognised_unicode_character() {
    let error = tokenize("1 + é").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: 'é' }
    );
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_tokenize_number_overflow() {
    let error = tokenize("1 + 9223372036854775808").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::MalformedNumberLiteral {
            literal: "9223372036854775808".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_tokenize_largest_literal() {
    let tokens = tokenize("9223372036854775807").unwrap();

    assert_eq!(tokens, vec![Token::Number(i64::MAX), Token::EOF]);
}
