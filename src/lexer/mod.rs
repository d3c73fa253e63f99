//! Lexical analysis module for the evaluator.
//!
//! This module contains the scanner that turns source text into tokens one
//! at a time, as the parser asks for them. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of integer literals and the `+` / `-` operators
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
