use crate::{
    ast::{Directive, Operator, QueryClause, Separator},
    error::QueryError,
    lexer::Lexer,
    value::{parse_field_value, parse_number, Value},
};

/// Segments a token sequence into [`QueryClause`]s.
///
/// A single left-to-right pass. The only lookahead is one token, used to
/// attach a trailing `and` / `or` to the clause before it.
pub struct Parser {
    tokens: Vec<String>,
    position: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self::from_tokens(lexer.collect())
    }

    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn current_token(&self) -> Option<&str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    fn peek_separator(&self) -> Option<Separator> {
        self.tokens
            .get(self.position + 1)
            .and_then(|t| Separator::from_token(t))
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Parse every remaining token.
    ///
    /// Connectives are consumed without producing a clause. The first value
    /// that fails coercion aborts the parse.
    pub fn parse(&mut self) -> Result<Vec<QueryClause>, QueryError> {
        let mut clauses = Vec::new();

        while let Some(token) = self.current_token() {
            if Separator::from_token(token).is_none() {
                clauses.push(self.parse_clause()?);
            }
            self.advance();
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            clauses = clauses.len(),
            "parsed query"
        );
        Ok(clauses)
    }

    fn parse_clause(&self) -> Result<QueryClause, QueryError> {
        let text = &self.tokens[self.position];
        let (token, operator, raw) = split_clause(text)?;

        let clause = match Directive::classify(token) {
            // Join targets are never coerced
            Some(Directive::Join) => {
                QueryClause::new(token, Operator::Join, Value::String(raw.to_string()))
            }
            Some(directive) => {
                QueryClause::new(token, directive.operator(), Value::Number(parse_number(raw)))
            }
            None => QueryClause::new(token, operator, parse_field_value(raw)?)
                .with_separator(self.peek_separator()),
        };

        tracing::trace!(
            token = %clause.token,
            operator = %clause.operator,
            value = %clause.value,
            "clause"
        );
        Ok(clause)
    }
}

/// Split clause text on its first operator symbol into
/// `(token, operator, raw value)`.
///
/// The earliest position holding any symbol wins, and at that position the
/// longest symbol wins, so `age>=18` splits as `>=` and `18` rather than
/// `>` and `=18`. The token is trimmed. The raw value is everything
/// after the symbol, further operator characters included.
pub fn split_clause(text: &str) -> Result<(&str, Operator, &str), QueryError> {
    let (index, operator) = text
        .char_indices()
        .find_map(|(i, _)| {
            let rest = &text[i..];
            Operator::ALL
                .into_iter()
                .find(|op| rest.starts_with(op.symbol()))
                .map(|op| (i, op))
        })
        .ok_or_else(|| QueryError::MissingOperator(text.to_string()))?;

    let token = text[..index].trim();
    let raw = &text[index + operator.symbol().len()..];
    Ok((token, operator, raw))
}
