//! # opcalc
//!
//! A table-dispatched evaluator for integer expressions of the form
//! `operand operator operand`.
//!
//! Each expression is a sequence of string tokens. Evaluation checks the
//! token count, parses the left operand, resolves the operator symbol in an
//! [`OperatorTable`], parses the right operand and applies the operator.
//! Every failure is classified as an [`EvalError`] and is local to its
//! expression, so a batch always yields one [`Report`] per input.
//!
//! ## Architecture
//!
//! - **Operator**: closed set of binary integer operations
//! - **Operator Table**: immutable symbol lookup, injected into evaluation
//! - **Evaluate**: per-expression dispatch and batch evaluation
//! - **Report**: per-expression outcome, printable or serializable
//!
//! ## Example
//!
//! ```
//! use opcalc::{EvalContext, Evaluate, OperatorTable};
//!
//! let table = OperatorTable::standard();
//! let ctx = EvalContext::default();
//!
//! assert_eq!(["2", "+", "3"].eval(&table, &ctx), Ok(5));
//! assert!(["2", "%", "3"].eval(&table, &ctx).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod expression;
pub mod operator;
pub mod outcome;
pub mod table;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, Result, EXPRESSION_ARITY};
pub use eval::{eval_batch, eval_expr, parse_operand, Evaluate};
pub use evaluator::Evaluator;
pub use expression::{parse_batch, Expression};
pub use operator::Operator;
pub use outcome::Report;
pub use table::OperatorTable;

/// opcalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The reference batch: four valid expressions, then one of each failure.
pub const DEMO_BATCH: &[&str] = &[
    "2 + 3",
    "2 - 3",
    "2 * 3",
    "2 / 3",
    "2 % 3",
    "2 + three",
    "2 + 3",
    "2",
];
