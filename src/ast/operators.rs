use std::fmt;

/// Clause operators.
///
/// The set is closed: every clause the parser emits carries one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Structural
    /// Join a relation (`->`)
    Join,
    /// Pagination directive (`#`)
    Hash,

    // Comparison
    /// Equal (`:`)
    Equal,
    /// Not equal (`!:`)
    NotEqual,
    /// Like (`~`)
    Like,
    /// Not like (`!~`)
    NotLike,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl Operator {
    /// Every operator, two-character symbols first so that a scan at one
    /// position prefers `>=` over `>`.
    pub const ALL: [Operator; 10] = [
        Operator::Join,
        Operator::NotEqual,
        Operator::NotLike,
        Operator::GreaterEqual,
        Operator::LessEqual,
        Operator::Hash,
        Operator::Equal,
        Operator::Like,
        Operator::GreaterThan,
        Operator::LessThan,
    ];

    /// The symbol as written in a query.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Join => "->",
            Operator::Hash => "#",
            Operator::Equal => ":",
            Operator::NotEqual => "!:",
            Operator::Like => "~",
            Operator::NotLike => "!~",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
        }
    }

    /// Look up an operator by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical connective between a clause and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl Separator {
    /// Recognise a connective token. Only the exact lowercase words count.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "and" => Some(Separator::And),
            "or" => Some(Separator::Or),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::And => "and",
            Separator::Or => "or",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
