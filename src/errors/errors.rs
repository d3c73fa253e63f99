use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at position {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MalformedNumberLiteral { .. } => "MalformedNumberLiteral",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
            ErrorImpl::TooDeeplyNested { .. } => "TooDeeplyNested",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Expected a number after the operator",
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::MalformedNumberLiteral { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::ArithmeticOverflow { operation } => ErrorTip::Suggestion(format!(
                "Result of {} does not fit in a 64-bit integer",
                operation
            )),
            ErrorImpl::TooDeeplyNested { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than the limit of {}",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("malformed number literal: {literal:?}")]
    MalformedNumberLiteral { literal: String },
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: String },
    #[error("expression nested deeper than {limit} levels")]
    TooDeeplyNested { limit: usize },
}
