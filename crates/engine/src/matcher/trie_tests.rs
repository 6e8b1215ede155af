// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// The classic `he / she / his / hers` automaton.
fn classic() -> (Trie<bool>, Vec<NodeId>) {
    let mut trie: Trie<bool> = Trie::new();
    let ids: Vec<NodeId> = ["he", "she", "his", "hers"]
        .iter()
        .map(|w| {
            let id = trie.insert(&chars(w));
            trie.node_mut(id).payload = true;
            id
        })
        .collect();
    trie.build_links(|accept| *accept);
    (trie, ids)
}

fn walk(trie: &Trie<bool>, s: &str) -> NodeId {
    s.chars().fold(ROOT, |node, c| trie.transition(node, c))
}

#[test]
fn shared_prefixes_share_nodes() {
    let (trie, ids) = classic();
    // root, h, he, s, sh, she, hi, his, her, hers
    assert_eq!(trie.len(), 10);
    assert_eq!(trie.node(ids[3]).depth, 4);
}

#[test]
fn failure_links_point_to_longest_suffix() {
    let (trie, ids) = classic();
    let she = ids[1];
    let he = ids[0];
    assert_eq!(trie.node(she).failure, he);
    let his = ids[2];
    let s = walk(&trie, "s");
    assert_eq!(trie.node(his).failure, s);
}

#[test]
fn depth_one_nodes_fail_to_root() {
    let (trie, _) = classic();
    let h = walk(&trie, "h");
    assert_eq!(trie.node(h).depth, 1);
    assert_eq!(trie.node(h).failure, ROOT);
}

#[test]
fn output_links_chain_accepting_suffixes() {
    let (trie, ids) = classic();
    let she = ids[1];
    let found: Vec<NodeId> = trie.accepting_suffixes(she, |a| *a).collect();
    assert_eq!(found, vec![she, ids[0]]);
}

#[test]
fn transition_recovers_after_mismatch() {
    let (trie, ids) = classic();
    assert_eq!(walk(&trie, "ushers"), ids[3]);
    assert_eq!(walk(&trie, "hx"), ROOT);
}

#[test]
fn build_links_returns_breadth_first_order() {
    let (mut trie, _) = classic();
    let order = trie.build_links(|a| *a);
    let depths: Vec<usize> = order.iter().map(|&id| trie.node(id).depth).collect();
    let mut sorted = depths.clone();
    sorted.sort();
    assert_eq!(depths, sorted);
    assert_eq!(order.len(), trie.len() - 1);
}
