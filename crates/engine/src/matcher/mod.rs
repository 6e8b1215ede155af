// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blacklist matchers.
//!
//! Two strategies implement [`Matcher`]:
//! - [`AutomatonMatcher`]: one pass over the input regardless of how many
//!   patterns there are, with wildcard patterns handled by forked traversals
//! - [`RegexMatcher`]: one compiled regex per term, used as a baseline

pub mod automaton;
pub mod regex;
mod scan;
mod trie;
pub mod whitelist;

use std::cmp::Ordering;
use std::collections::HashSet;

pub use automaton::{AutomatonMatcher, DEFAULT_FORKED_TRAVERSAL_LIMIT};
pub use regex::RegexMatcher;
pub use scan::MatchCursor;
pub use whitelist::WhitelistAutomaton;

use crate::error::{Error, Result};
use crate::pattern::{BlacklistedTerm, ParsedPattern, SimpleNode, simplify};
use crate::transform::TransformerPipeline;

/// A blacklisted term found in the input.
///
/// Indices are inclusive byte offsets into the caller's string and always
/// fall on character boundaries, so `&input[start_index..=end_index]` is the
/// matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchPayload {
    pub term_id: i64,
    /// Number of characters matched, counted after transformation.
    pub match_length: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl MatchPayload {
    /// The matched slice of `input`.
    pub fn text<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start_index..=self.end_index)
    }
}

/// Order by start index, then end index, then term id.
pub fn compare_match_by_position(a: &MatchPayload, b: &MatchPayload) -> Ordering {
    a.start_index
        .cmp(&b.start_index)
        .then(a.end_index.cmp(&b.end_index))
        .then(a.term_id.cmp(&b.term_id))
}

/// Common matcher contract.
pub trait Matcher {
    /// The first accepted match, stopping the scan as soon as one is found.
    fn first_match(&self, input: &str) -> Result<Option<MatchPayload>>;

    /// Every match; sorted by [`compare_match_by_position`] if `sorted`.
    fn get_all_matches(&self, input: &str, sorted: bool) -> Result<Vec<MatchPayload>>;

    fn has_match(&self, input: &str) -> Result<bool> {
        Ok(self.first_match(input)?.is_some())
    }
}

/// Everything needed to build a matcher.
#[derive(Debug, Clone, Default)]
pub struct MatcherOptions {
    pub blacklisted_terms: Vec<BlacklistedTerm>,
    pub whitelisted_terms: Vec<String>,
    pub blacklist_transformers: TransformerPipeline,
    pub whitelist_transformers: TransformerPipeline,
    /// Automaton only; `None` means [`DEFAULT_FORKED_TRAVERSAL_LIMIT`].
    pub forked_traversal_limit: Option<usize>,
}

impl MatcherOptions {
    pub fn new(blacklisted_terms: Vec<BlacklistedTerm>) -> Self {
        Self {
            blacklisted_terms,
            ..Self::default()
        }
    }

    pub fn with_whitelisted_terms(
        mut self,
        terms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.whitelisted_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_blacklist_transformers(mut self, pipeline: TransformerPipeline) -> Self {
        self.blacklist_transformers = pipeline;
        self
    }

    pub fn with_whitelist_transformers(mut self, pipeline: TransformerPipeline) -> Self {
        self.whitelist_transformers = pipeline;
        self
    }

    pub fn with_forked_traversal_limit(mut self, limit: usize) -> Self {
        self.forked_traversal_limit = Some(limit);
        self
    }
}

/// A validated term with its optional expansion.
pub(crate) struct PreparedTerm<'a> {
    pub(crate) id: i64,
    pub(crate) pattern: &'a ParsedPattern,
    pub(crate) simplified: Vec<Vec<SimpleNode>>,
}

/// Reject duplicate ids, empty patterns and patterns that can match nothing.
pub(crate) fn prepare_terms(terms: &[BlacklistedTerm]) -> Result<Vec<PreparedTerm<'_>>> {
    let mut seen = HashSet::with_capacity(terms.len());
    let mut prepared = Vec::with_capacity(terms.len());
    for term in terms {
        if !seen.insert(term.id) {
            return Err(Error::DuplicateTermId { id: term.id });
        }
        if term.pattern.nodes.is_empty() {
            return Err(Error::EmptyPattern { id: term.id });
        }
        if term.pattern.potentially_matches_empty_string() {
            return Err(Error::MatchesEmptyString {
                id: term.id,
                pattern: term.pattern.to_string(),
            });
        }
        let simplified = simplify(&term.pattern.nodes);
        prepared.push(PreparedTerm {
            id: term.id,
            pattern: &term.pattern,
            simplified,
        });
    }
    Ok(prepared)
}

/// Word characters for boundary assertions: ASCII letters and digits.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// True if the character before byte `start` is absent or not a word char.
pub(crate) fn boundary_before(input: &str, start: usize) -> bool {
    input
        .get(..start)
        .and_then(|s| s.chars().next_back())
        .is_none_or(|c| !is_word_char(c))
}

/// True if the character after the one ending at byte `end` is absent or
/// not a word char.
pub(crate) fn boundary_after(input: &str, end: usize) -> bool {
    input
        .get(end + 1..)
        .and_then(|s| s.chars().next())
        .is_none_or(|c| !is_word_char(c))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
