//! CLI support for qclause
//!
//! Provides programmatic access to the qclause CLI functionality for
//! embedding in other tools.

mod check;
mod docs;

pub use check::{execute_check, execute_value, CheckOptions, ValueReport};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Query error
    #[error("Parse error: {0}")]
    Query(#[from] crate::QueryError),
    /// JSON serialization error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No query provided
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'qclause docs' to see available categories.")]
    UnknownCategory(String),
}
