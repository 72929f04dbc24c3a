//! Per-expression evaluation reports

use std::fmt;

use serde::{Serialize, Serializer};

use crate::EvalError;

/// The outcome of evaluating one expression in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    index: usize,
    tokens: Vec<String>,
    outcome: Result<i64, EvalError>,
}

impl Report {
    /// Create a report.
    pub fn new(index: usize, tokens: Vec<String>, outcome: Result<i64, EvalError>) -> Self {
        Self {
            index,
            tokens,
            outcome,
        }
    }

    /// Position of the expression in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The expression's tokens as received.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The computed value or the error that stopped it.
    pub fn outcome(&self) -> &Result<i64, EvalError> {
        &self.outcome
    }

    /// Consume the report, returning its outcome.
    pub fn into_outcome(self) -> Result<i64, EvalError> {
        self.outcome
    }

    /// The computed value, if evaluation succeeded.
    pub fn value(&self) -> Option<i64> {
        self.outcome.as_ref().ok().copied()
    }

    /// The error, if evaluation failed.
    pub fn error(&self) -> Option<&EvalError> {
        self.outcome.as_ref().err()
    }

    /// Whether evaluation succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// One line: the integer or the error message.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "{}", value),
            Err(err) => write!(f, "{}", err),
        }
    }
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    index: usize,
    expression: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportRecord {
            index: self.index,
            expression: &self.tokens,
            value: self.value(),
            kind: self.error().map(EvalError::kind),
            error: self.error().map(ToString::to_string),
        }
        .serialize(serializer)
    }
}
