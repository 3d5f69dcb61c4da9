//! Parser for two-operand expression lines.
//!
//! Turns the [`Token`] stream of a line into an [`Expr`].
//!
//! # Grammar
//!
//! ```text
//! line   = number op number
//! number = ('+' | '-')? NUMBER
//! op     = '+' | '-' | '*' | '/'
//! ```
//!
//! A sign counts as part of a number only when it is immediately adjacent
//! to it in the source text, so `-2.5 * 4` and `1 - -2` parse while
//! `- 2.5 * 4` does not. Whitespace around the operands and the operator
//! is ignored.
//!
//! # Examples
//!
//! ```
//! use minicalc::parser::parse;
//!
//! let expr = parse("12 + 3").unwrap();
//! assert_eq!(expr.evaluate().unwrap(), 15.0);
//!
//! let expr = parse("  -2.5 * 4").unwrap();
//! assert_eq!(expr.evaluate().unwrap(), -10.0);
//! ```

use std::iter::Peekable;

use thiserror::Error;

use crate::expression::{BinaryOp, Expr};
use crate::token::{SpannedToken, Token, TokenError, Tokenizer};

/// Errors produced while parsing an expression line.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// The line ended before the expression was complete.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A token that does not fit the `number op number` shape.
    #[error("unexpected token: {token:?}")]
    UnexpectedToken {
        /// The offending token.
        token: Token,
        /// Position of the token.
        pos: usize,
    },

    /// An error forwarded from the tokenizer.
    #[error("{0}")]
    TokenError(#[from] TokenError),
}

impl ParseError {
    /// Returns the byte position of the error, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEof => None,
            Self::UnexpectedToken { pos, .. } => Some(*pos),
            Self::TokenError(te) => Some(te.pos),
        }
    }
}

/// Parser for a single expression line.
pub struct Parser<'a> {
    tokens: Peekable<Tokenizer<'a>>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input line.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(input).peekable(),
        }
    }

    /// Parses the input and returns the expression triple.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the line does not have the shape
    /// `number op number`.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let left = self.number()?;
        let op = self.operator()?;
        let right = self.number()?;

        match self.tokens.next() {
            None => Ok(Expr::new(left, op, right)),
            Some(Ok(st)) => Err(ParseError::UnexpectedToken {
                token: st.token,
                pos: st.pos,
            }),
            Some(Err(err)) => Err(err.into()),
        }
    }

    fn peek(&mut self) -> Option<&Result<SpannedToken, TokenError>> {
        self.tokens.peek()
    }

    fn advance(&mut self) -> Option<Result<SpannedToken, TokenError>> {
        self.tokens.next()
    }

    /// Parses an operand: a number literal with an optional adjacent sign.
    fn number(&mut self) -> Result<f64, ParseError> {
        let spanned = self.advance().ok_or(ParseError::UnexpectedEof)??;

        match spanned.token {
            Token::Number(n) => Ok(n),
            Token::Symbol(sign @ ('+' | '-')) => {
                // The sign must touch the literal, as in `-2.5`
                if let Some(Ok(SpannedToken {
                    token: Token::Number(n),
                    pos,
                })) = self.peek()
                {
                    if *pos == spanned.pos + 1 {
                        let n = *n;
                        self.advance();
                        return Ok(if sign == '-' { -n } else { n });
                    }
                }

                Err(ParseError::UnexpectedToken {
                    token: spanned.token,
                    pos: spanned.pos,
                })
            }
            token => Err(ParseError::UnexpectedToken {
                token,
                pos: spanned.pos,
            }),
        }
    }

    /// Parses the operator between the two operands.
    fn operator(&mut self) -> Result<BinaryOp, ParseError> {
        let spanned = self.advance().ok_or(ParseError::UnexpectedEof)??;

        match spanned.token {
            Token::Symbol(c) => {
                let op = match c {
                    '+' => BinaryOp::Add,
                    '-' => BinaryOp::Sub,
                    '*' => BinaryOp::Mul,
                    '/' => BinaryOp::Div,
                    // the tokenizer only emits these four symbols
                    _ => unreachable!(),
                };
                Ok(op)
            }
            token => Err(ParseError::UnexpectedToken {
                token,
                pos: spanned.pos,
            }),
        }
    }
}

/// Parses an input line into an expression triple.
///
/// # Errors
///
/// Returns [`ParseError`] when the line is not a valid two-operand
/// expression.
///
/// # Examples
///
/// ```
/// use minicalc::parser::parse;
///
/// assert_eq!(parse("2 + 2").unwrap().evaluate().unwrap(), 4.0);
/// assert!(parse("2 + 2 + 2").is_err());
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(input).parse()
}
