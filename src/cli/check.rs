//! Parse queries and coerce values from the command line

use serde_json::json;

use super::CliError;
use crate::output::{clauses_to_json, value_to_json};
use crate::{parse_field_value, parse_query};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to parse
    pub query: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Result of coercing a single raw value
#[derive(Debug, Clone, PartialEq)]
pub struct ValueReport {
    /// Name of the coerced type
    pub type_name: &'static str,
    /// The coerced value rendered as JSON
    pub value: serde_json::Value,
}

impl ValueReport {
    pub fn to_json(&self) -> serde_json::Value {
        json!({ "type": self.type_name, "value": self.value })
    }
}

fn render(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Parse a query and render its clauses as JSON
pub fn execute_check(options: &CheckOptions) -> Result<String, CliError> {
    let query = options.query.as_deref().ok_or(CliError::NoInput)?;
    let clauses = parse_query(query.trim_end())?;
    tracing::info!(clauses = clauses.len(), "query parsed");
    render(&clauses_to_json(&clauses), options.pretty)
}

/// Coerce one raw value and render it with its type name
pub fn execute_value(raw: &str, pretty: bool) -> Result<String, CliError> {
    let value = parse_field_value(raw)?;
    let report = ValueReport {
        type_name: value.type_name(),
        value: value_to_json(&value),
    };
    render(&report.to_json(), pretty)
}
