//! Operator table mapping symbols to operators

use indexmap::IndexMap;

use crate::operator::Operator;

/// Immutable mapping from operator symbol to [`Operator`].
///
/// Built once, up front, and handed to the evaluator by reference. The
/// builder methods consume the table, so a table that has been shared can
/// no longer change.
///
/// # Example
///
/// ```
/// use opcalc::{Operator, OperatorTable};
///
/// let table = OperatorTable::standard().with("x", Operator::Mul);
///
/// assert_eq!(table.lookup("+"), Some(Operator::Add));
/// assert_eq!(table.lookup("x"), Some(Operator::Mul));
/// assert_eq!(table.lookup("%"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorTable {
    entries: IndexMap<String, Operator>,
}

impl OperatorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four standard operators under their usual symbols.
    pub fn standard() -> Self {
        Operator::ALL
            .iter()
            .fold(Self::new(), |table, op| table.with(op.symbol(), *op))
    }

    /// Return a table with `symbol` bound to `op`.
    ///
    /// Rebinding an existing symbol replaces its operator but keeps its
    /// position.
    pub fn with(mut self, symbol: impl Into<String>, op: Operator) -> Self {
        self.entries.insert(symbol.into(), op);
        self
    }

    /// Resolve a symbol.
    pub fn lookup(&self, symbol: &str) -> Option<Operator> {
        self.entries.get(symbol).copied()
    }

    /// Whether `symbol` has an entry.
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(symbol, operator)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Operator)> {
        self.entries.iter().map(|(s, op)| (s.as_str(), *op))
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Operator)> for OperatorTable {
    fn from_iter<I: IntoIterator<Item = (String, Operator)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
