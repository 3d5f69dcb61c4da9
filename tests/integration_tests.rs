//! Integration tests for the calculator.
//!
//! Exercise the public library API: `evaluate`, `format_value` and the
//! error taxonomy.

use minicalc::expression::{BinaryOp, Expr};
use minicalc::parser::parse;
use minicalc::{evaluate, format_value, CalcError};

// ─────────────────────────────────────────────────────────────────────────────
// Basic operations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn basic_addition() {
    assert_eq!(evaluate("1 + 1").unwrap(), 2.0);
    assert_eq!(evaluate("100 + 200").unwrap(), 300.0);
    assert_eq!(evaluate("0 + 0").unwrap(), 0.0);
}

#[test]
fn basic_subtraction() {
    assert_eq!(evaluate("5 - 3").unwrap(), 2.0);
    assert_eq!(evaluate("3 - 5").unwrap(), -2.0);
    assert_eq!(evaluate("0 - 0").unwrap(), 0.0);
}

#[test]
fn basic_multiplication() {
    assert_eq!(evaluate("3 * 4").unwrap(), 12.0);
    assert_eq!(evaluate("0 * 100").unwrap(), 0.0);
    assert_eq!(evaluate("-3 * 4").unwrap(), -12.0);
}

#[test]
fn basic_division() {
    assert_eq!(evaluate("10 / 2").unwrap(), 5.0);
    assert_eq!(evaluate("7 / 2").unwrap(), 3.5); // not truncated
    assert_eq!(evaluate("0 / 5").unwrap(), 0.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Signed operands and decimals
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn signed_operands() {
    assert_eq!(evaluate("-2.5 * 4").unwrap(), -10.0);
    assert_eq!(evaluate("1 - -2").unwrap(), 3.0);
    assert_eq!(evaluate("-3 + -2").unwrap(), -5.0);
    assert_eq!(evaluate("+5 - 3").unwrap(), 2.0);
}

#[test]
fn decimal_operands() {
    assert_eq!(evaluate("2.5 + 2.5").unwrap(), 5.0);
    assert_eq!(evaluate(".5 * 4").unwrap(), 2.0);
    assert_eq!(evaluate("1.25 * 4").unwrap(), 5.0);
}

#[test]
fn whitespace_handling() {
    assert_eq!(evaluate("1+2").unwrap(), 3.0);
    assert_eq!(evaluate("  1  +  2  ").unwrap(), 3.0);
    assert_eq!(evaluate("\t1\t+\t2\t").unwrap(), 3.0);
    assert_eq!(evaluate("  -2.5 * 4").unwrap(), -10.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Output formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn whole_results_print_without_decimal_point() {
    assert_eq!(format_value(evaluate("12 + 3").unwrap()), "15");
    assert_eq!(format_value(evaluate("4 * 2.5").unwrap()), "10");
    assert_eq!(format_value(evaluate("  -2.5 * 4").unwrap()), "-10");
}

#[test]
fn fractional_results_keep_their_fraction() {
    assert_eq!(format_value(evaluate("7 / 2").unwrap()), "3.5");
    assert_eq!(format_value(evaluate("1 / 4").unwrap()), "0.25");
    assert_eq!(format_value(evaluate("0.5 - 2").unwrap()), "-1.5");
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn error_division_by_zero() {
    let result = evaluate("1 / 0");
    assert!(matches!(result, Err(CalcError::Eval(_))));
    assert_eq!(result.unwrap_err().to_string(), "Division by zero");
}

#[test]
fn error_division_by_zero_for_any_dividend() {
    assert!(evaluate("0 / 0").is_err());
    assert!(evaluate("-3.5 / 0").is_err());
    assert!(evaluate("1 / 0.0").is_err());
}

#[test]
fn error_empty_input() {
    assert!(matches!(evaluate(""), Err(CalcError::Parse(_))));
    assert!(matches!(evaluate("   "), Err(CalcError::Parse(_))));
}

#[test]
fn error_invalid_syntax() {
    assert!(evaluate("42").is_err()); // no operator
    assert!(evaluate("1 +").is_err());
    assert!(evaluate("* 1").is_err());
    assert!(evaluate("1 + 2 + 3").is_err()); // three operands
    assert!(evaluate("banana").is_err());
    assert!(evaluate("1 % 2").is_err()); // unsupported operator symbol
}

#[test]
fn invalid_expressions_share_one_message() {
    let expected = "Invalid expression. Expected format: <number> <op> <number>";

    for input in ["", "banana", "1 +", "1 + 2 + 3", "1 % 2"] {
        assert_eq!(evaluate(input).unwrap_err().to_string(), expected);
    }
}

#[test]
fn parse_errors_carry_positions() {
    assert_eq!(evaluate("1 @ 2").unwrap_err().position(), Some(2));
    assert_eq!(evaluate("1 + 2 3").unwrap_err().position(), Some(6));
    assert_eq!(evaluate("1 / 0").unwrap_err().position(), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn canonical_formatting_round_trips() {
    let cases = [
        (12.0, BinaryOp::Add, 3.0),
        (5.0, BinaryOp::Sub, 3.0),
        (-2.5, BinaryOp::Mul, 4.0),
        (0.5, BinaryOp::Div, -8.0),
    ];

    for (a, op, b) in cases {
        let line = format!("{a} {} {b}", op.symbol());
        assert_eq!(parse(&line).unwrap(), Expr::new(a, op, b), "line: '{line}'");
    }
}
