// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan state for [`AutomatonMatcher`].

use std::collections::VecDeque;
use std::str::CharIndices;

use crate::buffer::CircularBuffer;
use crate::error::{Error, Result};
use crate::interval::{Interval, IntervalSet};
use crate::pattern::SimpleNode;
use crate::transform::{PipelineRun, SourceSpan};

use super::automaton::{AutomatonMatcher, BlacklistNode, FragmentId, PatternId};
use super::trie::{NodeId, ROOT};
use super::{MatchPayload, boundary_after, boundary_before};

/// Lazy, resumable scan of one input.
///
/// Matches come out in the order their last character is reached. Each
/// cursor owns its scan state, so any number of cursors may run against the
/// same matcher at once.
pub struct MatchCursor<'m, 'i> {
    matcher: &'m AutomatonMatcher,
    input: &'i str,
    source: CharIndices<'i>,
    run: PipelineRun<'m>,
    whitelisted: IntervalSet,
    /// Source start byte of each recent transformed character.
    positions: CircularBuffer<usize>,
    current: NodeId,
    traversals: Vec<ForkedTraversal>,
    /// Matches found at the current character, not yet handed out.
    pending: VecDeque<MatchPayload>,
    done: bool,
}

impl<'m, 'i> MatchCursor<'m, 'i> {
    pub(crate) fn new(matcher: &'m AutomatonMatcher, input: &'i str) -> Self {
        Self {
            matcher,
            input,
            source: input.char_indices(),
            run: matcher.blacklist_transformers.start(),
            whitelisted: matcher.whitelist.scan(input),
            positions: CircularBuffer::new(matcher.max_match_length),
            current: ROOT,
            traversals: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Advance to the next accepted match.
    ///
    /// After an error the cursor is finished; call [`reset`](Self::reset) to
    /// scan again from the start.
    pub fn next_match(&mut self) -> Result<Option<MatchPayload>> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Ok(Some(found));
            }
            if self.done {
                return Ok(None);
            }
            let Some((start, raw)) = self.source.next() else {
                self.done = true;
                self.traversals.clear();
                return Ok(None);
            };
            let Some(c) = self.run.transform(raw) else {
                continue;
            };
            if let Err(err) = self.step(c, SourceSpan::of_char(start, raw)) {
                self.done = true;
                self.traversals.clear();
                self.pending.clear();
                return Err(err);
            }
        }
    }

    /// Rewind to the start of the input.
    pub fn reset(&mut self) {
        self.source = self.input.char_indices();
        self.run.reset();
        self.positions.clear();
        self.current = ROOT;
        self.traversals.clear();
        self.pending.clear();
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done && self.pending.is_empty()
    }

    pub fn input(&self) -> &'i str {
        self.input
    }

    fn step(&mut self, c: char, span: SourceSpan) -> Result<()> {
        let matcher = self.matcher;
        self.positions.push(span.start);

        self.spawn_traversals(span)?;
        self.advance_traversals(c, span);

        self.current = matcher.trie.transition(self.current, c);
        for node in matcher
            .trie
            .accepting_suffixes(self.current, BlacklistNode::is_accept)
        {
            for &pattern_id in &matcher.trie.node(node).payload.accepts {
                self.emit(pattern_id, span.end);
            }
        }
        Ok(())
    }

    /// Start a traversal for every fragment whose literal prefix ends at the
    /// current node. The prefix of each node on the forked-traversal chain
    /// is a suffix of what was just matched, so those spawn too.
    fn spawn_traversals(&mut self, span: SourceSpan) -> Result<()> {
        let matcher = self.matcher;
        let mut spawn_from = Some(self.current);
        while let Some(id) = spawn_from {
            let payload = &matcher.trie.node(id).payload;
            for &fragment_id in &payload.fragments {
                let fragment = &matcher.fragments[fragment_id as usize];
                if fragment.flags.start {
                    let Some(start) = self.positions.get(fragment.pre_fragment_match_length)
                    else {
                        continue;
                    };
                    if !boundary_before(self.input, start) {
                        continue;
                    }
                }
                self.traversals.push(ForkedTraversal::new(fragment_id));
            }
            spawn_from = payload.forked_traversal_link;
        }

        if self.traversals.len() > matcher.forked_traversal_limit {
            tracing::debug!(
                "forked traversal limit {} exceeded at byte {} with {} active",
                matcher.forked_traversal_limit,
                span.start,
                self.traversals.len()
            );
            return Err(Error::ForkedTraversalLimitExceeded {
                input: self.input.to_string(),
                position: span.start,
                pattern_count: matcher.patterns.len(),
                limit: matcher.forked_traversal_limit,
            });
        }
        Ok(())
    }

    fn advance_traversals(&mut self, c: char, span: SourceSpan) {
        let matcher = self.matcher;
        let mut completed = Vec::new();
        self.traversals.retain_mut(|traversal| {
            let fragment = &matcher.fragments[traversal.fragment as usize];
            match traversal.advance(&fragment.remaining_nodes, c) {
                Advance::Continue => true,
                Advance::Discard => false,
                Advance::Complete => {
                    completed.push(fragment.pattern_id);
                    false
                }
            }
        });
        for pattern_id in completed {
            self.emit(pattern_id, span.end);
        }
    }

    /// Queue a match of `pattern_id` ending at byte `end` unless a boundary
    /// or the whitelist rules it out.
    fn emit(&mut self, pattern_id: PatternId, end: usize) {
        let pattern = &self.matcher.patterns[pattern_id as usize];
        let Some(start) = self.positions.get(pattern.length - 1) else {
            return;
        };
        if pattern.flags.start && !boundary_before(self.input, start) {
            return;
        }
        if pattern.flags.end && !boundary_after(self.input, end) {
            return;
        }
        if self.whitelisted.fully_contains(Interval::new(start, end)) {
            return;
        }
        let found = MatchPayload {
            term_id: pattern.term_id,
            match_length: pattern.length,
            start_index: start,
            end_index: end,
        };
        // Two expansions of one term can cover the same span.
        if !self.pending.contains(&found) {
            self.pending.push_back(found);
        }
    }
}

impl Iterator for MatchCursor<'_, '_> {
    type Item = Result<MatchPayload>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match().transpose()
    }
}

enum Advance {
    Continue,
    Discard,
    Complete,
}

/// Progress through one fragment.
#[derive(Debug, Clone, Copy)]
struct ForkedTraversal {
    fragment: FragmentId,
    /// Index into the fragment's nodes.
    node: usize,
    /// Characters of the current literal node already matched.
    offset: usize,
}

impl ForkedTraversal {
    fn new(fragment: FragmentId) -> Self {
        Self {
            fragment,
            node: 0,
            offset: 0,
        }
    }

    fn advance(&mut self, nodes: &[SimpleNode], c: char) -> Advance {
        match nodes.get(self.node) {
            Some(SimpleNode::Wildcard) => self.node += 1,
            Some(SimpleNode::Literal(chars)) => {
                if chars.get(self.offset) != Some(&c) {
                    return Advance::Discard;
                }
                self.offset += 1;
                if self.offset == chars.len() {
                    self.node += 1;
                    self.offset = 0;
                }
            }
            None => return Advance::Discard,
        }
        if self.node == nodes.len() {
            Advance::Complete
        } else {
            Advance::Continue
        }
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
