// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arena-allocated trie with Aho-Corasick failure and output links.
//!
//! Nodes are addressed by index; the root is always [`ROOT`]. All links are
//! indices into the same arena. Per-node data specific to an automaton lives
//! in the `payload`.

use std::collections::VecDeque;

use crate::edge_map::EdgeMap;

pub(crate) type NodeId = u32;

pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub(crate) struct TrieNode<P> {
    pub(crate) edges: EdgeMap<NodeId>,
    /// Length of the string this node represents.
    pub(crate) depth: usize,
    /// Longest proper suffix that is also in the trie.
    pub(crate) failure: NodeId,
    /// Nearest accepting node along the failure chain, excluding this node.
    pub(crate) output: Option<NodeId>,
    pub(crate) payload: P,
}

#[derive(Debug, Clone)]
pub(crate) struct Trie<P> {
    nodes: Vec<TrieNode<P>>,
}

impl<P: Default> Trie<P> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode {
                edges: EdgeMap::new(),
                depth: 0,
                failure: ROOT,
                output: None,
                payload: P::default(),
            }],
        }
    }

    /// Extend the trie with `chars`, returning the node for the full string.
    pub(crate) fn insert(&mut self, chars: &[char]) -> NodeId {
        let mut current = ROOT;
        for &c in chars {
            current = match self.node(current).edges.get(c) {
                Some(next) => next,
                None => {
                    let id = self.nodes.len() as NodeId;
                    let depth = self.node(current).depth + 1;
                    self.nodes.push(TrieNode {
                        edges: EdgeMap::new(),
                        depth,
                        failure: ROOT,
                        output: None,
                        payload: P::default(),
                    });
                    self.node_mut(current).edges.set(c, id);
                    id
                }
            };
        }
        current
    }
}

impl<P: Default> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Trie<P> {
    pub(crate) fn node(&self, id: NodeId) -> &TrieNode<P> {
        &self.nodes[id as usize]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<P> {
        &mut self.nodes[id as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Compute failure and output links breadth-first.
    ///
    /// Returns every non-root node in breadth-first order, so callers can
    /// derive further links that depend on shallower nodes being done first.
    pub(crate) fn build_links(&mut self, is_accept: impl Fn(&P) -> bool) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut queue = VecDeque::new();

        for (_, child) in self.node(ROOT).edges.iter() {
            queue.push_back(child);
        }

        while let Some(id) = queue.pop_front() {
            order.push(id);
            let children: Vec<(char, NodeId)> = self.node(id).edges.iter().collect();
            for (c, child) in children {
                let failure = self.follow_failures(self.node(id).failure, c);
                let target = self.node(failure);
                let output = if is_accept(&target.payload) {
                    Some(failure)
                } else {
                    target.output
                };
                let node = self.node_mut(child);
                node.failure = failure;
                node.output = output;
                queue.push_back(child);
            }
        }

        order
    }

    /// From `start`, follow failure links until a node with an edge on `c`
    /// is found and return that edge's target, or the root if none exists.
    fn follow_failures(&self, start: NodeId, c: char) -> NodeId {
        let mut current = start;
        loop {
            if let Some(next) = self.node(current).edges.get(c) {
                return next;
            }
            if current == ROOT {
                return ROOT;
            }
            current = self.node(current).failure;
        }
    }

    /// Advance the automaton from `from` on `c`.
    pub(crate) fn transition(&self, from: NodeId, c: char) -> NodeId {
        self.follow_failures(from, c)
    }

    /// `from` itself if accepting, then every accepting node on its output chain.
    pub(crate) fn accepting_suffixes<'t>(
        &'t self,
        from: NodeId,
        is_accept: impl Fn(&P) -> bool + 't,
    ) -> impl Iterator<Item = NodeId> + 't {
        let first = is_accept(&self.node(from).payload).then_some(from);
        let rest = std::iter::successors(self.node(from).output, move |&id| self.node(id).output);
        first.into_iter().chain(rest)
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
