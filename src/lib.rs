//! # minicalc
//!
//! Simple interactive command-line calculator.
//!
//! Supports:
//! - Two-operand expressions over 64-bit floats: `<number> <op> <number>`
//! - The operators `+`, `-`, `*`, `/`
//! - Optional signs and decimal points in the operands
//! - The interactive commands `help`, `clear`, `exit` and `quit`
//!
//! # Example
//!
//! ```
//! use minicalc::{evaluate, format_value};
//!
//! assert_eq!(evaluate("12 + 3").unwrap(), 15.0);
//! assert_eq!(format_value(evaluate("4 * 2.5").unwrap()), "10");
//! ```

pub mod expression;
pub mod parser;
pub mod selftest;
pub mod token;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Top-level calculator error.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// The input line is not a valid two-operand expression.
    #[error("Invalid expression. Expected format: <number> <op> <number>")]
    Parse(#[from] parser::ParseError),

    /// The expression could not be evaluated (division by zero).
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

impl CalcError {
    /// Returns the position of the error in the input line, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Eval(_) => None,
        }
    }
}

/// Evaluates an expression line and returns the result.
///
/// # Errors
///
/// Returns [`CalcError`] when parsing or evaluation fails.
///
/// # Examples
///
/// ```
/// use minicalc::evaluate;
///
/// assert_eq!(evaluate("2 + 2").unwrap(), 4.0);
/// assert_eq!(evaluate("  -2.5 * 4").unwrap(), -10.0);
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let expr = parser::parse(input)?;
    let result = expr.evaluate()?;
    Ok(result)
}

/// Renders a result for display.
///
/// Integer-valued results are rendered without a decimal point; everything
/// else uses the default `f64` representation.
///
/// # Examples
///
/// ```
/// use minicalc::format_value;
///
/// assert_eq!(format_value(10.0), "10");
/// assert_eq!(format_value(2.5), "2.5");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Runs the interactive calculator loop.
///
/// Reads expressions from the terminal, evaluates them and prints the
/// result. End of input or an interrupt during the read is a clean exit.
///
/// # Errors
///
/// Returns [`rustyline::error::ReadlineError`] on terminal failures other
/// than end-of-input or interrupt.
pub fn run() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Simple CLI Calculator");
    print_help();

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                println!("Exiting.");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye.");
            return Ok(());
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("clear") {
            rl.clear_screen()?;
            continue;
        }

        rl.add_history_entry(input)?;

        match evaluate(input) {
            Ok(value) => println!("{}", format_value(value)),
            Err(err) => println!("Error: {err}"),
        }
    }
}

/// Prints the fixed usage summary.
fn print_help() {
    println!("Commands:");
    println!("  Type an expression like: 12 + 3");
    println!("  Supported operators: +  -  *  /");
    println!("  clear  : clear the screen");
    println!("  exit   : quit the program");
    println!("  --test : run built-in tests and exit");
}
