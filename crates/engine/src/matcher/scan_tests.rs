// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::error::{Error, Result};
use crate::matcher::{AutomatonMatcher, MatchPayload, MatcherOptions};
use crate::pattern::{assign_incrementing_ids, parse};
use crate::transform::TransformerPipeline;
use crate::transform::builtin::collapse_duplicates;

use super::*;

fn matcher(patterns: &[&str], limit: Option<usize>) -> AutomatonMatcher {
    let terms = assign_incrementing_ids(patterns.iter().map(|p| parse(p).unwrap()));
    let mut options = MatcherOptions::new(terms);
    options.forked_traversal_limit = limit;
    AutomatonMatcher::new(options).unwrap()
}

fn ends(found: &[MatchPayload]) -> Vec<usize> {
    found.iter().map(|m| m.end_index).collect()
}

#[test]
fn yields_in_order_of_last_character() {
    let m = matcher(&["abcd", "bc"], None);
    let found: Vec<MatchPayload> = m.matches("abcd").collect::<Result<_>>().unwrap();
    assert_eq!(ends(&found), vec![2, 3]);
    assert_eq!(found[0].term_id, 1);
}

#[test]
fn next_match_is_lazy() {
    let m = matcher(&["a"], None);
    let mut cursor = m.matches("a a a");
    assert_eq!(cursor.next_match().unwrap().unwrap().start_index, 0);
    assert!(!cursor.is_done());
    assert_eq!(cursor.next_match().unwrap().unwrap().start_index, 2);
    assert_eq!(cursor.next_match().unwrap().unwrap().start_index, 4);
    assert!(cursor.next_match().unwrap().is_none());
    assert!(cursor.is_done());
    assert!(cursor.next_match().unwrap().is_none());
}

#[test]
fn reset_rescans_from_start() {
    let m = matcher(&["ab", "b"], None);
    let mut cursor = m.matches("ab");
    let first: Vec<MatchPayload> = cursor.by_ref().collect::<Result<_>>().unwrap();
    assert!(cursor.is_done());

    cursor.reset();
    assert!(!cursor.is_done());
    let second: Vec<MatchPayload> = cursor.by_ref().collect::<Result<_>>().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn reset_clears_stateful_transformers() {
    let mut options = MatcherOptions::new(assign_incrementing_ids([parse("ab").unwrap()]));
    options.blacklist_transformers =
        TransformerPipeline::new(vec![collapse_duplicates(1, Default::default())]);
    let m = AutomatonMatcher::new(options).unwrap();

    let mut cursor = m.matches("aab");
    assert_eq!(cursor.by_ref().count(), 1);
    cursor.reset();
    let again = cursor.next_match().unwrap().unwrap();
    assert_eq!((again.start_index, again.end_index), (0, 2));
}

#[test]
fn error_finishes_the_cursor() {
    let m = matcher(&["a?"], Some(0));
    let mut cursor = m.matches("aaa");
    let err = cursor.next_match().unwrap_err();
    assert!(matches!(err, Error::ForkedTraversalLimitExceeded { .. }));
    assert!(cursor.is_done());
    assert!(cursor.next().is_none());
}

#[test]
fn iterator_yields_error_once() {
    let m = matcher(&["a?"], Some(0));
    let items: Vec<Result<MatchPayload>> = m.matches("aaa").collect();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_err());
}

#[test]
fn independent_cursors_share_a_matcher() {
    let m = matcher(&["a?c"], None);
    let mut left = m.matches("abc");
    let mut right = m.matches("xxaxc");
    assert_eq!(right.next_match().unwrap().unwrap().start_index, 2);
    assert_eq!(left.next_match().unwrap().unwrap().start_index, 0);
    assert!(left.next_match().unwrap().is_none());
    assert!(right.next_match().unwrap().is_none());
}

#[test]
fn scans_across_threads() {
    let m = &matcher(&["s?x"], None);
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["six", "sax sox", "none"]
            .into_iter()
            .map(|input| scope.spawn(move || m.matches(input).count()))
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![1, 2, 0]);
    });
}

#[test]
fn input_is_borrowed_not_copied() {
    let m = matcher(&["z"], None);
    let text = String::from("zz");
    let cursor = m.matches(&text);
    assert_eq!(cursor.input(), "zz");
}

#[test]
fn traversal_discards_on_mismatch() {
    let nodes = vec![SimpleNode::Wildcard, SimpleNode::Literal(vec!['b', 'c'])];
    let mut t = ForkedTraversal::new(0);
    assert!(matches!(t.advance(&nodes, 'x'), Advance::Continue));
    assert!(matches!(t.advance(&nodes, 'b'), Advance::Continue));
    assert!(matches!(t.advance(&nodes, 'x'), Advance::Discard));
}

#[test]
fn traversal_completes_at_last_node() {
    let nodes = vec![SimpleNode::Wildcard, SimpleNode::Literal(vec!['b'])];
    let mut t = ForkedTraversal::new(0);
    assert!(matches!(t.advance(&nodes, 'a'), Advance::Continue));
    assert!(matches!(t.advance(&nodes, 'b'), Advance::Complete));
}
