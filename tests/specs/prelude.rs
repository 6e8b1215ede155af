// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small builder for constructing matchers and collecting their
//! results as `(term_id, start_index, end_index)` triples.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

pub use wordsieve::transform::builtin;
pub use wordsieve::{
    AutomatonMatcher, Error, ErrorKind, MatchPayload, Matcher, MatcherOptions, RegexMatcher,
    TransformerPipeline, assign_incrementing_ids, parse,
};

/// Route library logs to the test writer, filtered by `WORDSIEVE_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("WORDSIEVE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Start building a matcher over `patterns`, with ids assigned in order.
pub fn sieve(patterns: &[&str]) -> SieveBuilder {
    init_tracing();
    let terms = assign_incrementing_ids(patterns.iter().map(|p| parse(p).unwrap()));
    SieveBuilder {
        options: MatcherOptions::new(terms),
    }
}

pub struct SieveBuilder {
    options: MatcherOptions,
}

#[allow(dead_code)]
impl SieveBuilder {
    pub fn whitelist(mut self, terms: &[&str]) -> Self {
        self.options.whitelisted_terms = terms.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn blacklist_transformers(mut self, pipeline: TransformerPipeline) -> Self {
        self.options.blacklist_transformers = pipeline;
        self
    }

    pub fn whitelist_transformers(mut self, pipeline: TransformerPipeline) -> Self {
        self.options.whitelist_transformers = pipeline;
        self
    }

    pub fn english(self) -> Self {
        self.blacklist_transformers(builtin::english_blacklist_pipeline())
            .whitelist_transformers(builtin::english_whitelist_pipeline())
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.options.forked_traversal_limit = Some(limit);
        self
    }

    pub fn automaton(self) -> AutomatonMatcher {
        AutomatonMatcher::new(self.options).unwrap()
    }

    pub fn regex(self) -> RegexMatcher {
        RegexMatcher::new(self.options).unwrap()
    }

    /// Sorted triples from the automaton matcher.
    pub fn scan(self, input: &str) -> Vec<(i64, usize, usize)> {
        triples(&self.automaton().get_all_matches(input, true).unwrap())
    }
}

pub fn triples(found: &[MatchPayload]) -> Vec<(i64, usize, usize)> {
    found
        .iter()
        .map(|m| (m.term_id, m.start_index, m.end_index))
        .collect()
}
