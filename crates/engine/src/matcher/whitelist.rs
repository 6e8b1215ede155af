// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain Aho-Corasick automaton over whitelisted terms.

use crate::buffer::CircularBuffer;
use crate::error::{Error, Result};
use crate::interval::{Interval, IntervalSet};
use crate::transform::TransformerPipeline;

use super::trie::{ROOT, Trie};

/// Finds every occurrence of every whitelisted term and reports their spans
/// as an [`IntervalSet`].
#[derive(Debug, Clone)]
pub struct WhitelistAutomaton {
    /// Payload marks accepting nodes.
    trie: Trie<bool>,
    transformers: TransformerPipeline,
    longest_term: usize,
}

impl WhitelistAutomaton {
    /// Build from raw terms. Each term is run through `transformers` first so
    /// that it lines up with transformed input.
    pub fn new(terms: &[String], transformers: TransformerPipeline) -> Result<Self> {
        let mut trie = Trie::new();
        let mut longest_term = 0;
        for (index, term) in terms.iter().enumerate() {
            let chars = transformers.apply(term).chars;
            if chars.is_empty() {
                return Err(Error::EmptyWhitelistTerm { index });
            }
            longest_term = longest_term.max(chars.len());
            let node = trie.insert(&chars);
            trie.node_mut(node).payload = true;
        }
        trie.build_links(|accept| *accept);

        Ok(Self {
            trie,
            transformers,
            longest_term,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.longest_term == 0
    }

    /// Spans, in source byte coordinates, of every whitelisted occurrence.
    pub fn scan(&self, input: &str) -> IntervalSet {
        let mut spans = IntervalSet::new();
        if self.is_empty() {
            return spans;
        }

        let mut run = self.transformers.start();
        let mut starts = CircularBuffer::new(self.longest_term);
        let mut current = ROOT;
        for (c, span) in run.chars(input) {
            starts.push(span.start);
            current = self.trie.transition(current, c);
            for node in self.trie.accepting_suffixes(current, |accept| *accept) {
                let length = self.trie.node(node).depth;
                if let Some(start) = starts.get(length - 1) {
                    spans.insert(Interval::new(start, span.end));
                }
            }
        }
        spans
    }
}

#[cfg(test)]
#[path = "whitelist_tests.rs"]
mod tests;
