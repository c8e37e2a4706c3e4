//! # Clause Model
//!
//! This module defines the records a query compiles to. A query is a flat,
//! whitespace-separated list of clauses joined by optional connectives:
//!
//! ```text
//! join->user limit#50 offset#100 id:1 and field:2 or user.id!:1
//! ```
//!
//! ## Submodules
//!
//! - **[clause]** - The [`QueryClause`] record and structural [`Directive`]s
//! - **[operators]** - The closed [`Operator`] set and the [`Separator`] connectives
//!
//! ## Clause Kinds
//!
//! - **Field filters** `field<op>value` - the value is coerced into a typed
//!   [`Value`](crate::Value) and may be followed by `and` / `or`
//! - **Joins** `join->relation` - always `->`, the value stays an uncoerced string
//! - **Pagination** `limit#n`, `offset#n` - always `#`, the value is a number
//!
//! ## Connectives
//!
//! `and` and `or` never become clauses of their own. They are folded into the
//! [`QueryClause::query_separator`] of the field filter directly before them
//! and describe its relation to the *next* clause.
//!
//! ## Operators
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `->`   | join |
//! | `#`    | pagination |
//! | `:`    | equal |
//! | `!:`   | not equal |
//! | `~`    | like |
//! | `!~`   | not like |
//! | `>` `<` `>=` `<=` | ordering |

pub mod clause;
pub mod operators;

pub use clause::{Directive, QueryClause};
pub use operators::{Operator, Separator};
