//! Evaluator bundling an operator table with its configuration

use crate::eval::{eval_batch, Evaluate};
use crate::outcome::Report;
use crate::{EvalContext, EvalError, Expression, OperatorTable};

/// An operator table and evaluation context held together.
///
/// The table is fixed when the evaluator is built.
///
/// # Example
///
/// ```
/// use opcalc::{Evaluator, Expression};
///
/// let evaluator = Evaluator::standard();
/// assert_eq!(evaluator.evaluate(&["2", "*", "3"]), Ok(6));
///
/// let batch = [Expression::parse("2 + 3"), Expression::parse("2")];
/// let reports = evaluator.evaluate_batch(&batch);
/// assert_eq!(reports.len(), 2);
/// assert_eq!(reports[0].value(), Some(5));
/// assert!(reports[1].error().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    table: OperatorTable,
    ctx: EvalContext,
}

impl Evaluator {
    /// Create an evaluator over `table` with the given context.
    pub fn new(table: OperatorTable, ctx: EvalContext) -> Self {
        Self { table, ctx }
    }

    /// Standard operators, default context.
    pub fn standard() -> Self {
        Self::new(OperatorTable::standard(), EvalContext::default())
    }

    /// The operator table in use.
    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// The evaluation context in use.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Evaluate one token sequence.
    pub fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<i64, EvalError> {
        tokens.eval(&self.table, &self.ctx)
    }

    /// Evaluate a batch in input order, one report per expression.
    pub fn evaluate_batch(&self, exprs: &[Expression]) -> Vec<Report> {
        eval_batch(exprs, &self.table, &self.ctx)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::standard()
    }
}
