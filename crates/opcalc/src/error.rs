//! Error types for expression evaluation

use std::num::ParseIntError;

use thiserror::Error;

use crate::operator::Operator;

/// Number of tokens in a well-formed expression.
pub const EXPRESSION_ARITY: usize = 3;

/// Errors produced while evaluating a single expression.
///
/// Every variant is terminal for the expression that raised it and for
/// nothing else: batch evaluation records the error and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression did not have exactly three tokens
    #[error(
        "malformed expression [{}]: expected 3 tokens, got {}",
        .tokens.join(" "),
        .tokens.len()
    )]
    MalformedExpression {
        /// The tokens as received
        tokens: Vec<String>,
    },

    /// An operand token is not a signed integer
    #[error("invalid operand {token:?}: {source}")]
    InvalidOperand {
        /// The offending token
        token: String,
        /// Why the integer parse failed
        source: ParseIntError,
    },

    /// The operator symbol has no entry in the operator table
    #[error("unsupported operator: {symbol}")]
    UnsupportedOperator {
        /// The unknown symbol
        symbol: String,
    },

    /// Integer division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in an `i64`
    #[error("integer overflow: {left} {op} {right}")]
    IntegerOverflow {
        /// The operator being applied
        op: Operator,
        /// Left operand
        left: i64,
        /// Right operand
        right: i64,
    },
}

impl EvalError {
    /// Stable snake_case name of the error kind.
    ///
    /// Used as the `kind` field of serialized reports.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::MalformedExpression { .. } => "malformed_expression",
            EvalError::InvalidOperand { .. } => "invalid_operand",
            EvalError::UnsupportedOperator { .. } => "unsupported_operator",
            EvalError::DivisionByZero => "division_by_zero",
            EvalError::IntegerOverflow { .. } => "integer_overflow",
        }
    }

    /// Build a [`EvalError::MalformedExpression`] from any token slice.
    pub fn malformed<S: AsRef<str>>(tokens: &[S]) -> Self {
        EvalError::MalformedExpression {
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
