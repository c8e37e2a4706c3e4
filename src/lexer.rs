//! Splits raw query text into whitespace-separated tokens.
//!
//! Whitespace separates tokens except inside a double-quoted span. Quote
//! characters are kept in the token text exactly as found. Quoting is
//! positional rather than escape-based: the first `"` of a token opens a
//! span, and the span closes at the next `"` that is followed by whitespace
//! or the end of input. Any other `"` inside the span is literal content.
//!
//! ```text
//! field:"a b"        =>  field:"a b"
//! field:"""1"2"""    =>  field:"""1"2"""
//! ```

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Whether the quote at the cursor closes a span.
    fn at_closing_quote(&self) -> bool {
        self.current_char() == Some('"')
            && self.peek_char(1).is_none_or(char::is_whitespace)
    }

    fn read_token(&mut self) -> String {
        let mut result = String::new();
        let mut quoted = false;

        while let Some(ch) = self.current_char() {
            if quoted {
                if self.at_closing_quote() {
                    quoted = false;
                }
            } else if ch.is_whitespace() {
                break;
            } else if ch == '"' {
                quoted = true;
            }
            result.push(ch);
            self.advance();
        }

        result
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace();
        self.current_char()?;
        Some(self.read_token())
    }
}

impl Iterator for Lexer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }
}

/// Tokenize a whole query.
///
/// An empty or all-whitespace query yields no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    Lexer::new(query).collect()
}

#[test]
fn test_quoted_span_keeps_whitespace() {
    let mut lexer = Lexer::new("name:\"John Smith\" and age>30");
    assert_eq!(lexer.next_token().as_deref(), Some("name:\"John Smith\""));
    assert_eq!(lexer.next_token().as_deref(), Some("and"));
    assert_eq!(lexer.next_token().as_deref(), Some("age>30"));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_interior_quotes() {
    let mut lexer = Lexer::new("field:\"\"\"1\"2\"\"\" field2:\"3\"\"1\"");
    assert_eq!(lexer.next_token().as_deref(), Some("field:\"\"\"1\"2\"\"\""));
    assert_eq!(lexer.next_token().as_deref(), Some("field2:\"3\"\"1\""));
    assert_eq!(lexer.next_token(), None);
}
