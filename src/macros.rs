//! Utility macros for the evaluator.
//!
//! - `MK_OPERATOR!` - Creates an Operator entry for the operator table

/// Creates an Operator with both binding powers and both handlers.
///
/// The right binding power is derived from the left one and the
/// associativity, so an operator table entry states each number once.
///
/// # Arguments
///
/// * `$kind` - The OperatorKind
/// * `$bp` - The left BindingPower
/// * `$assoc` - The Associativity
/// * `$nud` - The prefix handler
/// * `$led` - The infix handler
///
/// # Example
///
/// ```ignore
/// let plus = MK_OPERATOR!(OperatorKind::Plus, BindingPower::ADDITIVE, Associativity::Left, parse_unary_plus_expr, parse_addition_expr);
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($kind:expr, $bp:expr, $assoc:expr, $nud:expr, $led:expr) => {
        Operator {
            kind: $kind,
            left_bp: $bp,
            right_bp: $assoc.right_bp($bp),
            nud: $nud,
            led: $led,
        }
    };
}
