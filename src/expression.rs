//! Binary expressions and their evaluation.
//!
//! An expression is the triple (left operand, operator, right operand)
//! extracted from one input line. Operands are `f64`, operators are `+`,
//! `-`, `*`, `/`.
//!
//! # Examples
//!
//! ```
//! use minicalc::expression::{BinaryOp, Expr};
//!
//! let e = Expr::new(2.0, BinaryOp::Add, 3.0);
//! assert_eq!(e.evaluate(), Ok(5.0));
//! ```

use thiserror::Error;

/// Errors produced when evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division is exactly zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The symbol is not one of the four supported operators.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(char),
}

/// The four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl BinaryOp {
    /// Converts an operator symbol to an operator.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnsupportedOperator`] for any symbol outside
    /// `+ - * /`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minicalc::expression::{BinaryOp, EvalError};
    ///
    /// assert_eq!(BinaryOp::from_symbol('*'), Ok(BinaryOp::Mul));
    /// assert_eq!(
    ///     BinaryOp::from_symbol('%'),
    ///     Err(EvalError::UnsupportedOperator('%'))
    /// );
    /// ```
    pub const fn from_symbol(symbol: char) -> Result<Self, EvalError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(EvalError::UnsupportedOperator(symbol)),
        }
    }

    /// The symbol this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when dividing by exactly zero
    /// (no epsilon tolerance).
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// A two-operand expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expr {
    /// Left operand.
    pub left: f64,
    /// Operator.
    pub op: BinaryOp,
    /// Right operand.
    pub right: f64,
}

impl Expr {
    /// Creates a new expression.
    #[must_use]
    pub const fn new(left: f64, op: BinaryOp, right: f64) -> Self {
        Self { left, op, right }
    }

    /// Evaluates the expression.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when dividing by zero.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.op.apply(self.left, self.right)
    }
}
