//! Compiles compact filter queries into ordered clause records.
//!
//! ```
//! use qclause::{parse_query, Operator, Separator, Value};
//!
//! let clauses = parse_query("limit#10 id:1 and name:\"Ada\"").unwrap();
//! assert_eq!(clauses.len(), 3);
//! assert_eq!(clauses[0].operator, Operator::Hash);
//! assert_eq!(clauses[1].query_separator, Some(Separator::And));
//! assert_eq!(clauses[2].value, Value::String("Ada".to_string()));
//! ```

pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Directive, Operator, QueryClause, Separator};
pub use error::QueryError;
pub use lexer::{tokenize, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::Parser;
pub use value::{parse_field_value, Value};

/// Parse a whole query into clauses, in input order.
///
/// Fails atomically: if any field value cannot be coerced no clauses are
/// returned.
pub fn parse_query(query: &str) -> Result<Vec<QueryClause>, QueryError> {
    Parser::new(Lexer::new(query)).parse()
}
