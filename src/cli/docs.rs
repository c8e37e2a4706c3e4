//! Documentation content for the qclause CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Values,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "values" | "value" | "types" => Some(Self::Values),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"QCLAUSE DOCUMENTATION

qclause compiles a compact filter query into an ordered list of clauses
(token, operator, typed value, optional connective) for a query builder.

DOCUMENTATION CATEGORIES

  syntax       Clauses, connectives, joins and pagination
  operators    The operator symbols
  values       How raw values become strings, numbers, booleans and timestamps

QUICK REFERENCE

  field:value          Field filter
  a:1 and b:2 or c:3   Connectives
  join->relation       Join
  limit#50 offset#100  Pagination
  name:"Ada Lovelace"  Quoted value (whitespace allowed)

Run 'qclause doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Values) => Ok(VALUES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Clauses and Connectives

CLAUSES
  <token><operator><value>
    A query is a whitespace-separated list of clauses. Each clause is split
    on its first operator symbol.

    Example:
      Query:  id:1 user.name~"Ada"
      Output: [{"token":"id","operator":":","value":1},
               {"token":"user.name","operator":"~","value":"Ada"}]

CONNECTIVES
  and | or
    A connective is never a clause. It is recorded as the querySeparator of
    the field filter before it and relates that clause to the next one.

    Example:
      Query:  id:1 and field:2
      Output: [{"token":"id",...,"querySeparator":"and"},
               {"token":"field",...}]

JOINS
  join->relation
    Any token starting with 'join'. The operator is always '->' and the
    value is kept as an uncoerced string.

PAGINATION
  limit#n   offset#n
    The operator is always '#' and the value is always a number, whatever
    symbol was written. An empty value is 0, 0x/0o/0b integers are
    accepted, and anything unparseable is NaN (rendered as null).

QUOTING
  field:"text with spaces"
    A double quote opens a span that ends at the next double quote followed
    by whitespace or the end of the query. Inner quotes are kept:
      field:"""1"2"""   =>  value ""1"2""
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - The Closed Symbol Set

  ->    Join
  #     Pagination (limit / offset)
  :     Equal
  !:    Not equal
  ~     Like
  !~    Not like
  >     Greater than
  <     Less than
  >=    Greater than or equal
  <=    Less than or equal

  Constraints:
    - The earliest symbol in a clause wins; at the same position the
      longer symbol wins (>= before >)
    - Everything after the symbol is the value, even if it contains
      further operator characters
    - A clause without any symbol is an error
"#;

const VALUES_DOC: &str = r#"VALUES - Coercion Rules

Raw values are checked in this order:

  1. QUOTED     "..."
       The outer quotes are stripped. An ISO 8601 date or date-time
       becomes a timestamp, anything else stays a string.
         "2023-04-09T12:34:56+00:00"  => timestamp
         "2023-04-09"                 => timestamp (midnight UTC)
         "true"                       => string "true"

  2. NUMBER     leading numeric prefix
         2.1    => 2.1
         12abc  => 12   (trailing text is ignored)

  3. BOOLEAN    true | false

  Anything else is an invalid value:
    $ qclause value abc
    The following is an invalid fieldValue: abc
"#;
