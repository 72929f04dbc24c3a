//! Expression evaluation

pub mod operand;

use crate::outcome::Report;
use crate::{EvalContext, EvalError, Expression, OperatorTable};

pub use operand::parse_operand;

/// Trait for evaluating token sequences to integers.
///
/// Implemented for [`Expression`] and for any slice of string-like tokens,
/// so plain arrays such as `["2", "+", "3"]` evaluate directly.
pub trait Evaluate {
    /// Evaluate against the given operator table.
    fn eval(&self, table: &OperatorTable, ctx: &EvalContext) -> Result<i64, EvalError>;
}

impl<S: AsRef<str>> Evaluate for [S] {
    fn eval(&self, table: &OperatorTable, ctx: &EvalContext) -> Result<i64, EvalError> {
        eval_tokens(self, table, ctx)
    }
}

impl Evaluate for Expression {
    fn eval(&self, table: &OperatorTable, ctx: &EvalContext) -> Result<i64, EvalError> {
        eval_tokens(self.tokens(), table, ctx)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Triple Dispatch
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate `[left, symbol, right]`.
///
/// Checks run in a fixed order: arity, left operand, operator, right
/// operand. The first failure wins.
fn eval_tokens<S: AsRef<str>>(
    tokens: &[S],
    table: &OperatorTable,
    ctx: &EvalContext,
) -> Result<i64, EvalError> {
    let [left, symbol, right] = tokens else {
        ctx.trace_step(|| format!("malformed: {} token(s)", tokens.len()));
        return Err(EvalError::malformed(tokens));
    };

    let left = parse_operand(left.as_ref())?;

    let symbol = symbol.as_ref();
    let op = table
        .lookup(symbol)
        .ok_or_else(|| EvalError::UnsupportedOperator {
            symbol: symbol.to_string(),
        })?;

    let right = parse_operand(right.as_ref())?;

    ctx.trace_step(|| format!("{} {} {} ({})", left, op, right, op.name()));
    let result = op.apply(left, right)?;
    ctx.trace_step(|| format!("= {}", result));

    Ok(result)
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(
    expr: &Expression,
    table: &OperatorTable,
    ctx: &EvalContext,
) -> Result<i64, EvalError> {
    expr.eval(table, ctx)
}

/// Evaluate every expression in order, producing one report per input.
///
/// Failures are recorded in the report and never stop the batch.
pub fn eval_batch<'a, I>(exprs: I, table: &OperatorTable, ctx: &EvalContext) -> Vec<Report>
where
    I: IntoIterator<Item = &'a Expression>,
{
    exprs
        .into_iter()
        .enumerate()
        .map(|(index, expr)| {
            let outcome = expr.eval(table, ctx);
            if let Err(err) = &outcome {
                ctx.trace_step(|| format!("#{} failed: {}", index, err.kind()));
            }
            Report::new(index, expr.tokens().to_vec(), outcome)
        })
        .collect()
}
