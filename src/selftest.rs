//! Built-in self-test suite, run with `--test`.
//!
//! A fixed set of six checks: each operator once, one parser case with
//! mixed spacing and a leading negative sign, and one division-by-zero
//! case.

use crate::expression::{BinaryOp, EvalError, Expr};
use crate::parser;

/// Runs the self-test suite and prints a one-line summary.
///
/// Check outcomes are collected rather than aborting on the first
/// failure; each failing check is listed before the summary. Returns
/// `true` only if every check passed.
pub fn run() -> bool {
    let checks: [(&str, bool); 6] = [
        (
            "evaluate 1 + 2",
            Expr::new(1.0, BinaryOp::Add, 2.0).evaluate() == Ok(3.0),
        ),
        (
            "evaluate 5 - 3",
            Expr::new(5.0, BinaryOp::Sub, 3.0).evaluate() == Ok(2.0),
        ),
        (
            "evaluate 4 * 2.5",
            Expr::new(4.0, BinaryOp::Mul, 2.5).evaluate() == Ok(10.0),
        ),
        (
            "evaluate 9 / 3",
            Expr::new(9.0, BinaryOp::Div, 3.0).evaluate() == Ok(3.0),
        ),
        ("parse '  -2.5 * 4'", parses_signed_decimal()),
        (
            "evaluate 1 / 0",
            Expr::new(1.0, BinaryOp::Div, 0.0).evaluate() == Err(EvalError::DivisionByZero),
        ),
    ];

    let total = checks.len();
    let mut passed = 0;

    for (name, ok) in checks {
        if ok {
            passed += 1;
        } else {
            println!("FAILED: {name}");
        }
    }

    println!("Ran {total} tests: {passed} passed, {} failed", total - passed);
    passed == total
}

fn parses_signed_decimal() -> bool {
    match parser::parse("  -2.5 * 4") {
        Ok(expr) => expr.left == -2.5 && expr.op == BinaryOp::Mul && expr.right == 4.0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_passes() {
        assert!(run());
    }

    #[test]
    fn parser_check_accepts_the_fixture() {
        assert!(parses_signed_decimal());
    }
}
