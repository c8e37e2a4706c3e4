// tests/lexer_tests.rs

use qclause::lexer::{tokenize, Lexer};

fn tokens(input: &str) -> Vec<String> {
    tokenize(input)
}

// ============================================================================
// Whitespace Separation
// ============================================================================

#[test]
fn test_single_token() {
    assert_eq!(tokens("id:1"), vec!["id:1"]);
}

#[test]
fn test_whitespace_separates_tokens() {
    let test_cases = vec![
        ("id:1 field:2", vec!["id:1", "field:2"]),
        ("id:1   field:2", vec!["id:1", "field:2"]),
        ("id:1\tfield:2", vec!["id:1", "field:2"]),
        ("id:1\nand\nfield:2", vec!["id:1", "and", "field:2"]),
        ("  id:1  ", vec!["id:1"]),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokens(input), expected, "Failed for input: {:?}", input);
    }
}

#[test]
fn test_empty_input() {
    assert!(tokens("").is_empty());
    assert!(tokens("   \t\n").is_empty());
}

#[test]
fn test_connectives_are_plain_tokens() {
    assert_eq!(
        tokens("id:1 and field:2 or user.id!:1"),
        vec!["id:1", "and", "field:2", "or", "user.id!:1"]
    );
}

#[test]
fn test_full_query() {
    assert_eq!(
        tokens("join->user limit#50 offset#100 id:1 and field:2 or user.id!:1"),
        vec![
            "join->user",
            "limit#50",
            "offset#100",
            "id:1",
            "and",
            "field:2",
            "or",
            "user.id!:1"
        ]
    );
}

// ============================================================================
// Quoted Spans
// ============================================================================

#[test]
fn test_quoted_span_is_atomic() {
    assert_eq!(
        tokens(r#"name:"Ada Lovelace" and age>30"#),
        vec![r#"name:"Ada Lovelace""#, "and", "age>30"]
    );
}

#[test]
fn test_quoted_span_keeps_inner_whitespace_exactly() {
    assert_eq!(tokens("q:\"a   b\tc\""), vec!["q:\"a   b\tc\""]);
}

#[test]
fn test_quotes_are_preserved() {
    assert_eq!(
        tokens(r#"field:"2023-04-09T12:34:56+00:00""#),
        vec![r#"field:"2023-04-09T12:34:56+00:00""#]
    );
}

#[test]
fn test_quote_closes_only_before_whitespace() {
    // The inner quote of "a"b c" is followed by 'b', so the span continues
    assert_eq!(tokens(r#"x:"a"b c" y:1"#), vec![r#"x:"a"b c""#, "y:1"]);
}

#[test]
fn test_doubled_quotes() {
    assert_eq!(
        tokens(r#"field:"""1"2""" field2:"3""1" user.id:1"#),
        vec![r#"field:"""1"2""""#, r#"field2:"3""1""#, "user.id:1"]
    );
}

#[test]
fn test_empty_quoted_value() {
    assert_eq!(tokens(r#"a:"" b:1"#), vec![r#"a:"""#, "b:1"]);
}

#[test]
fn test_unterminated_quote_runs_to_end() {
    assert_eq!(tokens(r#"a:"open and b:1"#), vec![r#"a:"open and b:1"#]);
}

#[test]
fn test_quote_followed_by_space_inside_span_closes_it() {
    // The second quote is followed by a space, which ends the span
    assert_eq!(tokens(r#"a:"x" y""#), vec![r#"a:"x""#, r#"y""#]);
}

// ============================================================================
// Lexer Cursor
// ============================================================================

#[test]
fn test_next_token_until_exhausted() {
    let mut lexer = Lexer::new("a:1 or b:2");
    assert_eq!(lexer.next_token().as_deref(), Some("a:1"));
    assert_eq!(lexer.next_token().as_deref(), Some("or"));
    assert_eq!(lexer.next_token().as_deref(), Some("b:2"));
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_lexer_is_iterator() {
    let collected: Vec<String> = Lexer::new("a:1 b:2").collect();
    assert_eq!(collected, vec!["a:1", "b:2"]);
}

#[test]
fn test_non_ascii_text() {
    assert_eq!(
        tokens(r#"name:"Zoë Ångström" city~Zürich"#),
        vec![r#"name:"Zoë Ångström""#, "city~Zürich"]
    );
}
