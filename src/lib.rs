#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::Error;
use crate::parser::parser::Parser;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into the evaluated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Evaluates `source` with a fresh parser and the default configuration.
pub fn evaluate_expression(source: &str) -> Result<i64, Error> {
    Parser::new(source).evaluate()
}

/// Returns the 1-based line number, the text of the line and the column of `position`.
///
/// A position at the very end of the source (where end-of-input errors are
/// reported) resolves to one past the last character of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}
