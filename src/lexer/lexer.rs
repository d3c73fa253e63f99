use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::lookups::lookup_operator,
    Position,
};

use super::tokens::{Token, Value, SYMBOL_LOOKUP};

/// Handles a pattern match of the given byte length at the cursor.
///
/// Returns `None` when the match is skipped rather than turned into a token.
pub type RegexHandler = fn(&mut Lexer, usize) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[+\-]").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
    ];
}

/// On-demand scanner over a single in-memory source string.
///
/// The cursor only moves forward while tokens are pulled; `rewind` and
/// `reset` are the only ways back to the start.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    source: String,
    pos: usize,
    /// Start of the most recently produced token.
    token_start: usize,
    /// Offset of the most recently consumed character.
    last_pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
            token_start: 0,
            last_pos: 0,
        }
    }

    /// Replaces the source, keeping the buffer's allocation.
    pub fn reset(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.rewind();
    }

    pub fn rewind(&mut self) {
        self.pos = 0;
        self.token_start = 0;
        self.last_pos = 0;
    }

    pub fn advance_n(&mut self, n: usize) {
        if n > 0 {
            self.last_pos = self.pos + n - 1;
            self.pos += n;
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Position of the most recently produced token.
    pub fn get_position(&self) -> Position {
        Position(self.token_start as u32)
    }

    pub fn get_last_position(&self) -> Position {
        Position(self.last_pos as u32)
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            self.token_start = self.pos;

            if self.at_eof() {
                trace!(position = self.pos, "scanned EOF");
                return Ok(Token::EOF);
            }

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.end()))
            });

            let Some((handler, len)) = matched else {
                return Err(self.unrecognised());
            };

            if let Some(token) = handler(self, len)? {
                trace!(token = %token, position = self.token_start, "scanned token");
                return Ok(token);
            }
        }
    }

    fn unrecognised(&self) -> Error {
        let character = self.at().unwrap_or('\0');
        Error::new(
            ErrorImpl::UnrecognisedCharacter { character },
            Position(self.pos as u32),
        )
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    lexer.advance_n(len);
    Ok(None)
}

fn operator_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let operator = lexer
        .at()
        .and_then(|symbol| SYMBOL_LOOKUP.get(&symbol))
        .and_then(|kind| lookup_operator(*kind))
        .ok_or_else(|| lexer.unrecognised())?;

    lexer.advance_n(len);
    Ok(Some(Token::Operator(operator)))
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let literal = &lexer.remainder()[..len];
    let value = literal.parse::<Value>().map_err(|_| {
        Error::new(
            ErrorImpl::MalformedNumberLiteral {
                literal: literal.to_string(),
            },
            lexer.get_position(),
        )
    })?;

    lexer.advance_n(len);
    Ok(Some(Token::Number(value)))
}

/// Scans `source` to completion, including the trailing EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        tokens.push(token);

        if token.is_eof() {
            return Ok(tokens);
        }
    }
}
