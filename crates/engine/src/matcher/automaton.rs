// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick blacklist automaton extended with forked traversals.
//!
//! Literal-only patterns are stored whole in the trie. A pattern containing a
//! wildcard stores only the literal run before its first wildcard; the rest
//! (the *fragment*) hangs off that trie node and is matched by an independent
//! walk spawned whenever the node is reached during a scan.
//!
//! Reaching a node also means every node on its failure chain was matched,
//! since failure links join exactly the nodes whose strings are suffixes of
//! one another. Forked-traversal links shortcut that chain to the nodes that
//! carry fragments, so spawning never walks the full failure chain.

use std::collections::HashSet;

use crate::error::Result;
use crate::pattern::{SimpleNode, simple_len};
use crate::transform::TransformerPipeline;

use super::scan::MatchCursor;
use super::trie::{NodeId, Trie};
use super::whitelist::WhitelistAutomaton;
use super::{
    MatchPayload, Matcher, MatcherOptions, compare_match_by_position, prepare_terms,
};

/// Most forked traversals alive at once before a scan gives up.
pub const DEFAULT_FORKED_TRAVERSAL_LIMIT: usize = 64;

pub(crate) type PatternId = u32;
pub(crate) type FragmentId = u32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct BoundaryFlags {
    pub(crate) start: bool,
    pub(crate) end: bool,
}

/// One simplified pattern, identified internally by its index.
#[derive(Debug, Clone)]
pub(crate) struct PatternInfo {
    pub(crate) term_id: i64,
    pub(crate) flags: BoundaryFlags,
    /// Characters consumed by a full match.
    pub(crate) length: usize,
}

/// The part of a pattern from its first wildcard on.
#[derive(Debug, Clone)]
pub(crate) struct ForkedFragment {
    pub(crate) pattern_id: PatternId,
    pub(crate) pre_fragment_match_length: usize,
    pub(crate) flags: BoundaryFlags,
    /// Starts with a wildcard; never empty.
    pub(crate) remaining_nodes: Vec<SimpleNode>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct BlacklistNode {
    /// Literal-only patterns ending here.
    pub(crate) accepts: Vec<PatternId>,
    /// Fragments whose literal prefix ends here.
    pub(crate) fragments: Vec<FragmentId>,
    /// Nearest proper suffix node that spawns fragments.
    pub(crate) forked_traversal_link: Option<NodeId>,
}

impl BlacklistNode {
    pub(crate) fn is_accept(&self) -> bool {
        !self.accepts.is_empty()
    }

    pub(crate) fn spawns_fragments(&self) -> bool {
        !self.fragments.is_empty()
    }
}

/// Single-pass matcher over the whole pattern set.
///
/// Immutable after construction and safe to share between threads; each
/// scan allocates its own state.
#[derive(Debug, Clone)]
pub struct AutomatonMatcher {
    pub(crate) trie: Trie<BlacklistNode>,
    pub(crate) patterns: Vec<PatternInfo>,
    pub(crate) fragments: Vec<ForkedFragment>,
    pub(crate) whitelist: WhitelistAutomaton,
    pub(crate) blacklist_transformers: TransformerPipeline,
    /// Longest full match of any pattern; sizes the ring buffer of positions.
    pub(crate) max_match_length: usize,
    pub(crate) forked_traversal_limit: usize,
}

impl AutomatonMatcher {
    pub fn new(options: MatcherOptions) -> Result<Self> {
        let MatcherOptions {
            blacklisted_terms,
            whitelisted_terms,
            blacklist_transformers,
            whitelist_transformers,
            forked_traversal_limit,
        } = options;

        let prepared = prepare_terms(&blacklisted_terms)?;
        let whitelist = WhitelistAutomaton::new(&whitelisted_terms, whitelist_transformers)?;

        let mut builder = Builder::default();
        for term in &prepared {
            let flags = BoundaryFlags {
                start: term.pattern.require_word_boundary_at_start,
                end: term.pattern.require_word_boundary_at_end,
            };
            let mut seen = HashSet::new();
            for nodes in &term.simplified {
                // `[a][a]b` expands to `ab` twice; one copy is enough.
                if seen.insert(nodes) {
                    builder.add_pattern(term.id, flags, nodes);
                }
            }
        }
        let Builder {
            mut trie,
            patterns,
            fragments,
            max_match_length,
        } = builder;

        let order = trie.build_links(BlacklistNode::is_accept);
        link_forked_traversals(&mut trie, &order);

        tracing::debug!(
            "built blacklist automaton: {} terms, {} simplified patterns, {} nodes, {} fragments",
            prepared.len(),
            patterns.len(),
            trie.len(),
            fragments.len()
        );

        Ok(Self {
            trie,
            patterns,
            fragments,
            whitelist,
            blacklist_transformers,
            max_match_length,
            forked_traversal_limit: forked_traversal_limit.unwrap_or(DEFAULT_FORKED_TRAVERSAL_LIMIT),
        })
    }

    /// Lazily scan `input`; see [`MatchCursor`].
    pub fn matches<'m, 'i>(&'m self, input: &'i str) -> MatchCursor<'m, 'i> {
        MatchCursor::new(self, input)
    }

    /// Number of simplified patterns after optional expansion.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    pub fn forked_traversal_limit(&self) -> usize {
        self.forked_traversal_limit
    }
}

impl Matcher for AutomatonMatcher {
    fn first_match(&self, input: &str) -> Result<Option<MatchPayload>> {
        self.matches(input).next_match()
    }

    fn get_all_matches(&self, input: &str, sorted: bool) -> Result<Vec<MatchPayload>> {
        let mut cursor = self.matches(input);
        let mut found = Vec::new();
        while let Some(m) = cursor.next_match()? {
            found.push(m);
        }
        if sorted {
            found.sort_by(compare_match_by_position);
        }
        Ok(found)
    }
}

#[derive(Default)]
struct Builder {
    trie: Trie<BlacklistNode>,
    patterns: Vec<PatternInfo>,
    fragments: Vec<ForkedFragment>,
    max_match_length: usize,
}

impl Builder {
    fn add_pattern(&mut self, term_id: i64, flags: BoundaryFlags, nodes: &[SimpleNode]) {
        let pattern_id = self.patterns.len() as PatternId;
        let length = simple_len(nodes);
        self.patterns.push(PatternInfo {
            term_id,
            flags,
            length,
        });
        self.max_match_length = self.max_match_length.max(length);

        match nodes.iter().position(|n| matches!(n, SimpleNode::Wildcard)) {
            None => {
                let node = self.trie.insert(&literal_chars(nodes));
                self.trie.node_mut(node).payload.accepts.push(pattern_id);
            }
            Some(first_wildcard) => {
                let prefix = literal_chars(&nodes[..first_wildcard]);
                let node = self.trie.insert(&prefix);
                let fragment_id = self.fragments.len() as FragmentId;
                self.fragments.push(ForkedFragment {
                    pattern_id,
                    pre_fragment_match_length: prefix.len(),
                    flags,
                    remaining_nodes: nodes[first_wildcard..].to_vec(),
                });
                self.trie.node_mut(node).payload.fragments.push(fragment_id);
            }
        }
    }
}

fn literal_chars(nodes: &[SimpleNode]) -> Vec<char> {
    let mut chars = Vec::new();
    for node in nodes {
        if let SimpleNode::Literal(run) = node {
            chars.extend_from_slice(run);
        }
    }
    chars
}

/// Point every node at the nearest node on its failure chain that spawns
/// fragments. `order` must be breadth-first so failure targets are linked
/// before the nodes that fail to them.
fn link_forked_traversals(trie: &mut Trie<BlacklistNode>, order: &[NodeId]) {
    for &id in order {
        let failure = trie.node(id).failure;
        let target = &trie.node(failure).payload;
        let link = if target.spawns_fragments() {
            Some(failure)
        } else {
            target.forked_traversal_link
        };
        trie.node_mut(id).payload.forked_traversal_link = link;
    }
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
