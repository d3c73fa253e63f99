use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

use crate::{
    errors::errors::Error,
    lexer::tokens::{Operator, OperatorKind, Value},
    MK_OPERATOR,
};

use super::{expr::*, parser::Parser};

/// How strongly a token binds to the value on its left (or, for the right
/// binding power, how strongly its right operand holds on to what follows).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct BindingPower(pub u32);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const ADDITIVE: BindingPower = BindingPower(100);
}

impl Display for BindingPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

impl Associativity {
    /// The right binding power for an operator binding at `left_bp`.
    ///
    /// The reduction loop only continues while the lookahead binds strictly
    /// tighter than the threshold, so a right operand parsed at `left_bp` stops
    /// before an operator of the same level and the chain folds to the left.
    pub fn right_bp(&self, left_bp: BindingPower) -> BindingPower {
        match self {
            Associativity::Left => left_bp,
            Associativity::Right => BindingPower(left_bp.0.saturating_sub(1)),
        }
    }
}

pub type NUDHandler = fn(&mut Parser, BindingPower) -> Result<Value, Error>;
pub type LEDHandler = fn(&mut Parser, Value, BindingPower) -> Result<Value, Error>;

pub type OperatorLookup = HashMap<OperatorKind, Operator>;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: OperatorLookup = create_operator_lookups();
}

pub fn create_operator_lookups() -> OperatorLookup {
    let mut lookup = HashMap::new();

    // Additive
    register(&mut lookup, MK_OPERATOR!(OperatorKind::Plus, BindingPower::ADDITIVE, Associativity::Left, parse_unary_plus_expr, parse_addition_expr));
    register(&mut lookup, MK_OPERATOR!(OperatorKind::Dash, BindingPower::ADDITIVE, Associativity::Left, parse_negation_expr, parse_subtraction_expr));

    lookup
}

fn register(lookup: &mut OperatorLookup, operator: Operator) {
    lookup.insert(operator.kind, operator);
}

pub fn lookup_operator(kind: OperatorKind) -> Option<Operator> {
    OPERATOR_LOOKUP.get(&kind).copied()
}
