//! Parser module evaluating token streams with a Pratt parser.
//!
//! This module contains the engine that reduces the tokens pulled from the
//! lexer to a single integer. It handles:
//!
//! - The reduction loop, driven by binding power comparisons
//! - Prefix and infix operator behaviour
//! - Checked arithmetic and nesting limits
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
