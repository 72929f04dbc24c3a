//! Binary integer operators

use std::fmt;

use crate::error::{EvalError, Result};

/// A binary integer operation.
///
/// Operators are resolved from symbols by an
/// [`OperatorTable`](crate::table::OperatorTable); this type only knows how
/// to apply itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition: `a + b`
    Add,
    /// Subtraction: `a - b`
    Sub,
    /// Multiplication: `a * b`
    Mul,
    /// Division truncating toward zero: `a / b`
    Div,
}

impl Operator {
    /// Every operator, in the order of the standard table.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The conventional symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Lowercase name, e.g. `"add"`.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// All arithmetic is checked. A zero divisor yields
    /// [`EvalError::DivisionByZero`]; a result outside `i64` (including
    /// `i64::MIN / -1`) yields [`EvalError::IntegerOverflow`].
    pub fn apply(self, left: i64, right: i64) -> Result<i64> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or(EvalError::IntegerOverflow {
            op: self,
            left,
            right,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
