use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::parser::lookups::{BindingPower, LEDHandler, NUDHandler};

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<char, OperatorKind> = {
        let mut map = HashMap::new();
        map.insert('+', OperatorKind::Plus);
        map.insert('-', OperatorKind::Dash);
        map
    };
}

/// The result of evaluating any sub-expression.
pub type Value = i64;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperatorKind {
    Plus,
    Dash,
}

impl OperatorKind {
    pub fn symbol(&self) -> char {
        match self {
            OperatorKind::Plus => '+',
            OperatorKind::Dash => '-',
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator token with its behaviour resolved at scan time.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    pub kind: OperatorKind,
    pub left_bp: BindingPower,
    pub right_bp: BindingPower,
    /// Prefix rule, used when no left operand precedes the operator.
    pub nud: NUDHandler,
    /// Infix rule, folds the running value with one parsed right operand.
    pub led: LEDHandler,
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.left_bp == other.left_bp
            && self.right_bp == other.right_bp
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    EOF,
    Number(Value),
    Operator(Operator),
}

impl Token {
    pub fn left_bp(&self) -> BindingPower {
        match self {
            Token::EOF | Token::Number(_) => BindingPower::DEFAULT,
            Token::Operator(operator) => operator.left_bp,
        }
    }

    pub fn right_bp(&self) -> BindingPower {
        match self {
            Token::EOF | Token::Number(_) => BindingPower::DEFAULT,
            Token::Operator(operator) => operator.right_bp,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::EOF)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::EOF => write!(f, "EOF"),
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator.kind),
        }
    }
}
