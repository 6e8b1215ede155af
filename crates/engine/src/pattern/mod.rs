// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blacklist pattern language.
//!
//! # Pattern syntax
//!
//! | Token    | Meaning                                              |
//! |----------|------------------------------------------------------|
//! | `abc`    | Literal characters                                   |
//! | `?`      | Any single character                                 |
//! | `[abc]`  | Optional literal run                                 |
//! | `[?]`    | Optional wildcard                                    |
//! | `\x`     | Escape one of `\ [ ] ? \|`                           |
//! | `\|abc`  | Word boundary required before the match (start only) |
//! | `abc\|`  | Word boundary required after the match (end only)    |
//!
//! Optionals do not nest and may not mix literals with wildcards.

mod ast;
mod parser;
mod simplify;

pub use ast::{Node, OptionalNode, ParsedPattern, SimpleNode};
pub use parser::{ParserError, parse};
pub use simplify::{simple_len, simplify};

/// A pattern paired with the caller-chosen id reported in match results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistedTerm {
    pub id: i64,
    pub pattern: ParsedPattern,
}

impl BlacklistedTerm {
    pub fn new(id: i64, pattern: ParsedPattern) -> Self {
        Self { id, pattern }
    }
}

/// Number patterns `0, 1, 2, ...` in order.
pub fn assign_incrementing_ids(
    patterns: impl IntoIterator<Item = ParsedPattern>,
) -> Vec<BlacklistedTerm> {
    patterns
        .into_iter()
        .enumerate()
        .map(|(i, pattern)| BlacklistedTerm::new(i as i64, pattern))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
