//! Parser implementation driving the Pratt reduction.
//!
//! This module contains the main Parser struct. The parser owns the lexer
//! and a single lookahead token, pulling tokens on demand as the reduction
//! loop in `expr` asks for them. It never buffers more than that one token.

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, Value},
    },
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// Tunables for a parser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest nesting of `parse_expr` calls before evaluation fails with
    /// `TooDeeplyNested`. Only stacked operands nest; left-associative
    /// chains are reduced in a loop.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: 256 }
    }
}

/// The evaluation engine.
///
/// Handlers receive the parser explicitly and call back into `parse_expr`
/// through it, so tokens never hold a reference to the parser.
pub struct Parser {
    /// Scanner over the current source
    lexer: Lexer,
    /// One-token lookahead
    current: Token,
    /// Position of the lookahead token
    current_pos: Position,
    /// Position of the token most recently taken out of the lookahead
    previous_pos: Position,
    /// Current nesting of `parse_expr`
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser over `source` with the default configuration.
    pub fn new(source: &str) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: &str, config: ParserConfig) -> Self {
        Parser {
            lexer: Lexer::new(source),
            current: Token::EOF,
            current_pos: Position::null(),
            previous_pos: Position::null(),
            depth: 0,
            config,
        }
    }

    /// Points the parser at a new source, reusing the lexer's buffer.
    ///
    /// A reset parser behaves exactly like one freshly built over `source`
    /// with the same configuration.
    pub fn reset(&mut self, source: &str) {
        self.lexer.reset(source);
        self.current = Token::EOF;
        self.current_pos = Position::null();
        self.previous_pos = Position::null();
        self.depth = 0;
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn source(&self) -> &str {
        self.lexer.source()
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Pulls the next token into the lookahead and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        self.previous_pos = self.current_pos;
        self.current_pos = self.lexer.get_position();
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Checks if the lookahead holds anything other than EOF.
    pub fn has_tokens(&self) -> bool {
        !self.current.is_eof()
    }

    /// Returns the position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.current_pos
    }

    /// Returns the position of the token most recently taken by `advance`.
    pub fn get_previous_position(&self) -> Position {
        self.previous_pos
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::TooDeeplyNested {
                    limit: self.config.max_depth,
                },
                self.current_pos,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Evaluates the whole source to a single value.
    ///
    /// Rewinds to the start of the source first, so repeated calls give the
    /// same result.
    pub fn evaluate(&mut self) -> Result<Value, Error> {
        self.lexer.rewind();
        self.current = Token::EOF;
        self.depth = 0;

        let result = self.evaluate_from_start();
        match &result {
            Ok(value) => debug!(value, "evaluated expression"),
            Err(error) => debug!(error = %error, "evaluation failed"),
        }

        result
    }

    fn evaluate_from_start(&mut self) -> Result<Value, Error> {
        // Prime the lookahead
        self.advance()?;

        let value = parse_expr(self, BindingPower::DEFAULT)?;

        if self.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current.to_string(),
                },
                self.current_pos,
            ));
        }

        Ok(value)
    }
}
