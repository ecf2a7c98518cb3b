//! Shared parser types (broker-agnostic).

use releve_core::Transaction;

/// What to do with a row whose quantity cell does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// The first unparseable quantity aborts the whole import.
    Strict,
    /// Keep such rows with quantity 0 and record a [`RowIssue`].
    Lenient,
}

/// One lenient-mode substitution: a cell kept its default value instead of
/// the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// 1-based data row number, equal to the record id.
    pub row: usize,
    /// Source column header.
    pub column: String,
    /// Raw cell text that did not parse.
    pub value: String,
}

/// Outcome of parsing one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    /// One record per data row, in source order.
    pub transactions: Vec<Transaction>,
    /// Substitutions made along the way; always empty in strict mode.
    pub issues: Vec<RowIssue>,
}
