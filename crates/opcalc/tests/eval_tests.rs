use opcalc::*;
use pretty_assertions::assert_eq;

// Helper to evaluate tokens against the standard table
fn eval(tokens: &[&str]) -> std::result::Result<i64, EvalError> {
    let table = OperatorTable::standard();
    let ctx = EvalContext::default();
    tokens.eval(&table, &ctx)
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_add() {
    assert_eq!(eval(&["2", "+", "3"]).unwrap(), 5);
    assert_eq!(eval(&["-2", "+", "-3"]).unwrap(), -5);
}

#[test]
fn test_eval_sub() {
    assert_eq!(eval(&["2", "-", "3"]).unwrap(), -1);
    assert_eq!(eval(&["0", "-", "-9"]).unwrap(), 9);
}

#[test]
fn test_eval_mul() {
    assert_eq!(eval(&["2", "*", "3"]).unwrap(), 6);
    assert_eq!(eval(&["-4", "*", "5"]).unwrap(), -20);
}

#[test]
fn test_eval_div_truncates() {
    assert_eq!(eval(&["2", "/", "3"]).unwrap(), 0);
    assert_eq!(eval(&["-7", "/", "2"]).unwrap(), -3);
    assert_eq!(eval(&["7", "/", "-2"]).unwrap(), -3);
    assert_eq!(eval(&["9", "/", "3"]).unwrap(), 3);
}

#[test]
fn test_eval_signed_operands() {
    assert_eq!(eval(&["+2", "*", "-3"]).unwrap(), -6);
}

#[test]
fn test_eval_matches_native_arithmetic() {
    let operands = [-17i64, -3, -1, 0, 1, 2, 5, 100];
    for &a in &operands {
        for &b in &operands {
            let (sa, sb) = (a.to_string(), b.to_string());
            let (sa, sb) = (sa.as_str(), sb.as_str());
            assert_eq!(eval(&[sa, "+", sb]).unwrap(), a + b);
            assert_eq!(eval(&[sa, "-", sb]).unwrap(), a - b);
            assert_eq!(eval(&[sa, "*", sb]).unwrap(), a * b);
            if b != 0 {
                assert_eq!(eval(&[sa, "/", sb]).unwrap(), a / b);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_unsupported_operator() {
    let err = eval(&["2", "%", "3"]).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnsupportedOperator {
            symbol: "%".to_string()
        }
    );
}

#[test]
fn test_eval_invalid_right_operand() {
    match eval(&["2", "+", "three"]).unwrap_err() {
        EvalError::InvalidOperand { token, .. } => assert_eq!(token, "three"),
        other => panic!("expected InvalidOperand, got {:?}", other),
    }
}

#[test]
fn test_eval_invalid_left_operand() {
    match eval(&["two", "+", "3"]).unwrap_err() {
        EvalError::InvalidOperand { token, .. } => assert_eq!(token, "two"),
        other => panic!("expected InvalidOperand, got {:?}", other),
    }
}

#[test]
fn test_eval_malformed() {
    assert_eq!(
        eval(&["2"]).unwrap_err(),
        EvalError::MalformedExpression {
            tokens: vec!["2".to_string()]
        }
    );
    assert_eq!(eval(&[]).unwrap_err().kind(), "malformed_expression");
    assert_eq!(eval(&["2", "+"]).unwrap_err().kind(), "malformed_expression");
}

#[test]
fn test_eval_division_by_zero() {
    assert_eq!(eval(&["1", "/", "0"]).unwrap_err(), EvalError::DivisionByZero);
}

#[test]
fn test_eval_overflow() {
    let err = eval(&["9223372036854775807", "+", "1"]).unwrap_err();
    assert_eq!(err.kind(), "integer_overflow");
    assert_eq!(err.to_string(), "integer overflow: 9223372036854775807 + 1");
    assert_eq!(
        eval(&["-9223372036854775808", "/", "-1"]).unwrap_err().kind(),
        "integer_overflow"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Custom Tables
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_custom_symbol() {
    let table = OperatorTable::standard().with("x", Operator::Mul);
    let ctx = EvalContext::default();
    assert_eq!(["4", "x", "5"].eval(&table, &ctx), Ok(20));
}

#[test]
fn test_eval_restricted_table() {
    let table = OperatorTable::new().with("+", Operator::Add);
    let ctx = EvalContext::default();
    assert_eq!(["4", "+", "5"].eval(&table, &ctx), Ok(9));
    assert_eq!(
        ["4", "-", "5"].eval(&table, &ctx).unwrap_err().kind(),
        "unsupported_operator"
    );
}

#[test]
fn test_eval_expression_type() {
    let expr = Expression::parse("12 / 4");
    let table = OperatorTable::standard();
    assert_eq!(eval_expr(&expr, &table, &EvalContext::new()), Ok(3));
}

#[test]
fn test_evaluator_uses_its_table() {
    let table: OperatorTable = vec![("plus".to_string(), Operator::Add)]
        .into_iter()
        .collect();
    let evaluator = Evaluator::new(table, EvalContext::default());
    assert_eq!(evaluator.evaluate(&["1", "plus", "1"]), Ok(2));
    assert!(evaluator.evaluate(&["1", "+", "1"]).is_err());
    assert_eq!(evaluator.table().len(), 1);
}
