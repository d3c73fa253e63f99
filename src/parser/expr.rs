use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, Value},
    Position,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    parser.enter_nesting()?;
    let result = reduce(parser, bp);
    parser.leave_nesting();

    result
}

fn reduce(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    // First apply the lead token's NUD
    let lead = parser.advance()?;
    trace!(token = %lead, bp = %bp, depth = parser.depth(), "nud");

    let mut left = match lead {
        Token::EOF => 0,
        Token::Number(value) => value,
        Token::Operator(operator) => (operator.nud)(parser, operator.left_bp)?,
    };

    // While the lookahead binds tighter than bp, fold it in with its LED
    while parser.current_token().left_bp() > bp {
        let lead = parser.advance()?;
        trace!(token = %lead, bp = %bp, left, "led");

        left = match lead {
            Token::Operator(operator) => (operator.led)(parser, left, operator.right_bp)?,
            Token::EOF | Token::Number(_) => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: lead.to_string(),
                    },
                    parser.get_previous_position(),
                ))
            }
        };
    }

    Ok(left)
}

/// Parses the operand an operator requires; running out of input here is an error.
pub fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    if parser.current_token().is_eof() {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.get_position(),
        ));
    }

    parse_expr(parser, bp)
}

fn overflow(operation: &str, position: Position) -> Error {
    Error::new(
        ErrorImpl::ArithmeticOverflow {
            operation: String::from(operation),
        },
        position,
    )
}

pub fn parse_unary_plus_expr(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    parse_operand(parser, bp)
}

pub fn parse_negation_expr(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    let position = parser.get_previous_position();
    let operand = parse_operand(parser, bp)?;

    operand
        .checked_neg()
        .ok_or_else(|| overflow("negation", position))
}

pub fn parse_addition_expr(parser: &mut Parser, left: Value, bp: BindingPower) -> Result<Value, Error> {
    let position = parser.get_previous_position();
    let right = parse_operand(parser, bp)?;

    left.checked_add(right)
        .ok_or_else(|| overflow("addition", position))
}

pub fn parse_subtraction_expr(parser: &mut Parser, left: Value, bp: BindingPower) -> Result<Value, Error> {
    let position = parser.get_previous_position();
    let right = parse_operand(parser, bp)?;

    left.checked_sub(right)
        .ok_or_else(|| overflow("subtraction", position))
}
