// Reference-behavior tests
//
// The corners exercised here are surprising on purpose. They are kept so that
// clause lists stay identical to what existing consumers already receive.

use chrono::DateTime;
use qclause::{parse_field_value, parse_query, Operator, QueryError, Separator, Value};

#[test]
fn compat_single_clause() {
    let clauses = parse_query("id:1").unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].token, "id");
    assert_eq!(clauses[0].operator, Operator::Equal);
    assert_eq!(clauses[0].value, Value::Number(1.0));
    assert_eq!(clauses[0].query_separator, None);
}

#[test]
fn compat_and_clause() {
    let clauses = parse_query("id:1 and field:2").unwrap();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].query_separator, Some(Separator::And));
    assert_eq!(clauses[1].token, "field");
    assert_eq!(clauses[1].value, Value::Number(2.0));
    assert_eq!(clauses[1].query_separator, None);
}

#[test]
fn compat_number_value_type() {
    let clauses = parse_query("field:2.1").unwrap();
    assert_eq!(clauses[0].value.as_number(), Some(2.1));
}

#[test]
fn compat_timestamp_value_type() {
    let clauses = parse_query(r#"field:"2023-04-09T12:34:56+00:00""#).unwrap();
    assert_eq!(
        clauses[0].value.as_timestamp(),
        Some(&DateTime::parse_from_rfc3339("2023-04-09T12:34:56+00:00").unwrap())
    );
}

#[test]
fn compat_only_outer_quotes_are_stripped() {
    let clauses = parse_query(r#"field:"""1"2""" field2:"3""1" user.id:1"#).unwrap();
    assert_eq!(clauses[0].value, Value::String(r#"""1"2"""#.into()));
    assert_eq!(clauses[1].value, Value::String(r#"3""1"#.into()));
    assert_eq!(clauses[2].value, Value::Number(1.0));
}

#[test]
fn compat_field_value_examples() {
    assert_eq!(parse_field_value("2.1"), Ok(Value::Number(2.1)));
    assert_eq!(parse_field_value("true"), Ok(Value::Boolean(true)));
    assert_eq!(parse_field_value("false"), Ok(Value::Boolean(false)));
    assert_eq!(parse_field_value(r#""true""#), Ok(Value::String("true".into())));
    assert_eq!(parse_field_value(r#""false""#), Ok(Value::String("false".into())));
    assert_eq!(
        parse_field_value(r#""2023-04-09T12:34:56+00:00""#),
        Ok(Value::Timestamp(
            DateTime::parse_from_rfc3339("2023-04-09T12:34:56+00:00").unwrap()
        ))
    );
}

#[test]
fn compat_numeric_prefix_wins_over_trailing_text() {
    // A leading number is enough, the rest of the value is discarded
    let clauses = parse_query("version:1.2.3 code:404NotFound").unwrap();
    assert_eq!(clauses[0].value, Value::Number(1.2));
    assert_eq!(clauses[1].value, Value::Number(404.0));
}

#[test]
fn compat_numeric_prefix_wins_over_boolean_check() {
    // Number parsing runs before the boolean check
    assert_eq!(parse_field_value("1true"), Ok(Value::Number(1.0)));
}

#[test]
fn compat_pagination_ignores_written_operator() {
    let clauses = parse_query("limit:50 offset<100").unwrap();
    assert!(clauses.iter().all(|c| c.operator == Operator::Hash));
}

#[test]
fn compat_invalid_value_names_raw_text() {
    assert_eq!(
        parse_query("id:1 and status:open"),
        Err(QueryError::InvalidFieldValue("open".into()))
    );
}

#[test]
fn compat_dangling_quote_is_empty_string() {
    // The lexer leaves the lone opening quote as the whole value
    let clauses = parse_query(r#"id:1 name:""#).unwrap();
    assert_eq!(clauses[1].value, Value::String(String::new()));
}

#[test]
fn compat_pagination_values_never_fail() {
    let clauses = parse_query("limit#abc offset#0x10 id:1").unwrap();
    assert!(clauses[0].value.as_number().is_some_and(f64::is_nan));
    assert_eq!(clauses[1].value, Value::Number(16.0));
    assert_eq!(clauses[2].value, Value::Number(1.0));
}
