//! Tokenizer for calculator input lines.
//!
//! # Example
//!
//! ```
//! use minicalc::token::{Tokenizer, Token};
//!
//! let tokens: Vec<Token> = Tokenizer::new("1 + 2.5")
//!     .map(|r| r.map(|st| st.token))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! ```

use std::{fmt::Display, num::ParseFloatError};
use thiserror::Error;

/// A lexical token of an input line.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// An unsigned number literal (a leading sign is handled by the parser).
    Number(f64),
    /// An operator symbol: `+`, `-`, `*`, `/`.
    Symbol(char),
}

/// A token with its position in the input line.
#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken {
    /// The token itself.
    pub token: Token,
    /// Byte offset of the token's start within the line.
    pub pos: usize,
}

impl SpannedToken {
    /// Creates a new token with a position.
    pub const fn new(token: Token, pos: usize) -> Self {
        Self { token, pos }
    }
}

/// Tokenization error.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("position {pos}: {kind}")]
pub struct TokenError {
    /// Byte offset of the error in the input line.
    pub pos: usize,
    /// Kind of error.
    pub kind: TokenErrorKind,
}

impl TokenError {
    const fn new(pos: usize, kind: TokenErrorKind) -> Self {
        Self { pos, kind }
    }
}

/// Kind of tokenization error.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenErrorKind {
    /// A character that is neither a digit, a decimal point nor an operator.
    UnknownSymbol(char),
    /// A digit run that is not a valid number, such as `1.2.3`.
    NumberError(ParseFloatError),
}

impl Display for TokenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol(symbol) => write!(f, "unknown symbol '{symbol}'"),
            Self::NumberError(err) => write!(f, "malformed number: {err}"),
        }
    }
}

/// Iterator over the tokens of an input line.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input line.
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let mut chars = self.input.chars();
        let ch = chars.next()?;
        self.input = chars.as_str();
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let byte_len: usize = self
            .input
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let (consumed, rest) = self.input.split_at(byte_len);
        self.pos += byte_len;
        self.input = rest;
        consumed
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    fn read_number(&mut self, start_pos: usize) -> Result<SpannedToken, TokenError> {
        let num_str = self.advance_while(|c| c.is_ascii_digit() || c == '.');

        num_str
            .parse()
            .map(|n| SpannedToken::new(Token::Number(n), start_pos))
            .map_err(|err| TokenError::new(start_pos, TokenErrorKind::NumberError(err)))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<SpannedToken, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let start_pos = self.pos;
        let ch = self.peek()?;

        let token = match ch {
            '+' | '-' | '*' | '/' => {
                self.advance();
                Ok(SpannedToken::new(Token::Symbol(ch), start_pos))
            }
            '0'..='9' | '.' => self.read_number(start_pos),
            _ => {
                self.advance();
                Err(TokenError::new(
                    start_pos,
                    TokenErrorKind::UnknownSymbol(ch),
                ))
            }
        };

        Some(token)
    }
}
