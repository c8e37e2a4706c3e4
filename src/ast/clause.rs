use crate::ast::{Operator, Separator};
use crate::value::Value;

/// One structured unit of a parsed query.
///
/// Built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryClause {
    /// Field name or structural keyword, trimmed
    pub token: String,

    /// Operator from the closed symbol set
    pub operator: Operator,

    /// Typed value
    pub value: Value,

    /// Connective between this clause and the next one, if any
    pub query_separator: Option<Separator>,
}

impl QueryClause {
    /// Creates a clause without a trailing connective.
    pub fn new(token: impl Into<String>, operator: Operator, value: Value) -> Self {
        QueryClause {
            token: token.into(),
            operator,
            value,
            query_separator: None,
        }
    }

    /// Attach the connective that follows this clause.
    pub fn with_separator(mut self, separator: Option<Separator>) -> Self {
        self.query_separator = separator;
        self
    }

    /// The structural keyword this clause was shaped by, if any.
    pub fn directive(&self) -> Option<Directive> {
        Directive::classify(&self.token)
    }
}

/// Structural keywords whose operator and value shape are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Any token starting with `join`
    Join,
    /// `limit`
    Limit,
    /// `offset`
    Offset,
}

impl Directive {
    /// Classify a trimmed clause token. `join` is a prefix match, the
    /// pagination keywords are exact.
    pub fn classify(token: &str) -> Option<Self> {
        if token.starts_with("join") {
            Some(Directive::Join)
        } else if token == "limit" {
            Some(Directive::Limit)
        } else if token == "offset" {
            Some(Directive::Offset)
        } else {
            None
        }
    }

    /// The operator every clause of this kind carries.
    pub fn operator(self) -> Operator {
        match self {
            Directive::Join => Operator::Join,
            Directive::Limit | Directive::Offset => Operator::Hash,
        }
    }
}
