//! Errors raised while parsing a query.

use thiserror::Error;

/// A failure to turn query text into clauses.
///
/// Parsing is fail-fast: the first error aborts the whole call and no partial
/// clause list is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A value matched none of the coercion rules (quoted, numeric, boolean).
    #[error("The following is an invalid fieldValue: {0}")]
    InvalidFieldValue(String),

    /// A clause contained no recognised operator symbol.
    ///
    /// Such input has no meaningful parse at all; this variant reports it
    /// instead of aborting the process. It is not a condition callers are
    /// expected to recover from.
    #[error("No operator found in clause: {0}")]
    MissingOperator(String),
}
