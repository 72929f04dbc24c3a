//! Expressions as token sequences

use std::fmt;

use crate::error::EXPRESSION_ARITY;

/// An ordered sequence of string tokens.
///
/// A well-formed expression is `[operand, operator, operand]`. Any other
/// length is still representable; it is rejected at evaluation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    tokens: Vec<String>,
}

impl Expression {
    /// Build an expression from any sequence of tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a line of text on whitespace.
    ///
    /// ```
    /// use opcalc::Expression;
    ///
    /// let expr = Expression::parse("  2 +   3 ");
    /// assert_eq!(expr.tokens(), ["2", "+", "3"]);
    /// ```
    pub fn parse(line: &str) -> Self {
        Self::from_tokens(line.split_whitespace())
    }

    /// The tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token count.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there are no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the token count is exactly three.
    pub fn is_well_formed(&self) -> bool {
        self.tokens.len() == EXPRESSION_ARITY
    }

    /// Consume the expression, returning its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl<S: Into<String>> From<Vec<S>> for Expression {
    fn from(tokens: Vec<S>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl AsRef<[String]> for Expression {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

/// Split source text into expressions, one per line.
///
/// Blank lines and lines whose first non-blank character is `#` are skipped.
pub fn parse_batch(src: &str) -> Vec<Expression> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Expression::parse)
        .collect()
}
