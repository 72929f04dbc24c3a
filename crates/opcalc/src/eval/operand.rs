//! Operand parsing

use crate::error::{EvalError, Result};

/// Parse an operand token as a signed 64-bit integer.
///
/// Accepts an optional leading sign followed by decimal digits. Surrounding
/// whitespace, fractional parts and out-of-range values are rejected.
pub fn parse_operand(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|source| EvalError::InvalidOperand {
        token: token.to_string(),
        source,
    })
}
