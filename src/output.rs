//! JSON rendering of parsed clauses.
//!
//! Downstream query builders usually consume clauses as JSON. Each clause
//! becomes an object with `token`, `operator` and `value`, plus
//! `querySeparator` when the clause is followed by a connective.
//!
//! - Numbers render as JSON numbers. Non-finite numbers render as `null`.
//! - Timestamps render as UTC RFC 3339 strings with milliseconds
//!   (`2023-04-09T12:34:56.000Z`).
//!
//! # Examples
//!
//! ```
//! use qclause::{parse_query, to_json};
//!
//! let clauses = parse_query("id:1 and field:2").unwrap();
//! assert_eq!(
//!     to_json(&clauses),
//!     r#"[{"operator":":","querySeparator":"and","token":"id","value":1.0},{"operator":":","token":"field","value":2.0}]"#
//! );
//! ```

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Number, Value as Json};

use crate::{ast::QueryClause, value::Value};

/// Convert a clause value to JSON.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::String(s) => Json::String(s.clone()),
        Value::Number(n) => Number::from_f64(*n).map(Json::Number).unwrap_or(Json::Null),
        Value::Boolean(b) => Json::Bool(*b),
        Value::Timestamp(t) => Json::String(
            t.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
    }
}

/// Convert one clause to a JSON object.
pub fn clause_to_json(clause: &QueryClause) -> Json {
    let mut obj = Map::new();
    obj.insert("token".to_string(), Json::String(clause.token.clone()));
    obj.insert(
        "operator".to_string(),
        Json::String(clause.operator.symbol().to_string()),
    );
    obj.insert("value".to_string(), value_to_json(&clause.value));
    if let Some(sep) = clause.query_separator {
        obj.insert(
            "querySeparator".to_string(),
            Json::String(sep.as_str().to_string()),
        );
    }
    Json::Object(obj)
}

/// Convert a clause list to a JSON array, preserving order.
pub fn clauses_to_json(clauses: &[QueryClause]) -> Json {
    Json::Array(clauses.iter().map(clause_to_json).collect())
}

/// Compact JSON for a clause list.
pub fn to_json(clauses: &[QueryClause]) -> String {
    clauses_to_json(clauses).to_string()
}

/// Pretty-printed JSON for a clause list, 2-space indentation.
pub fn to_json_pretty(clauses: &[QueryClause]) -> String {
    // Serializing a `serde_json::Value` to a string cannot fail
    serde_json::to_string_pretty(&clauses_to_json(clauses)).unwrap_or_default()
}
