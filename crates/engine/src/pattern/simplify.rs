// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optional expansion: turns a pattern into the set of literal+wildcard
//! patterns it stands for.

use super::ast::{Node, OptionalNode, SimpleNode};

/// Above this many optionals a single pattern expands into more than a
/// thousand simplified patterns.
const OPTIONAL_WARN_THRESHOLD: usize = 10;

/// Expand every optional in `nodes`.
///
/// Each optional doubles the result set, so a pattern with `k` optionals
/// yields `2^k` simplified patterns. Patterns without the optional come
/// before those with it. Adjacent literals are merged in every result.
pub fn simplify(nodes: &[Node]) -> Vec<Vec<SimpleNode>> {
    let optional_count = nodes
        .iter()
        .filter(|n| matches!(n, Node::Optional(_)))
        .count();
    if optional_count > OPTIONAL_WARN_THRESHOLD {
        tracing::warn!(
            "pattern has {} optionals and expands to {} simplified patterns",
            optional_count,
            1u128 << optional_count.min(127)
        );
    }

    let mut patterns: Vec<Vec<SimpleNode>> = vec![Vec::new()];
    for node in nodes {
        match node {
            Node::Literal(chars) => {
                for p in &mut patterns {
                    push_literal(p, chars);
                }
            }
            Node::Wildcard => {
                for p in &mut patterns {
                    p.push(SimpleNode::Wildcard);
                }
            }
            Node::Optional(child) => {
                let with_child: Vec<_> = patterns
                    .iter()
                    .cloned()
                    .map(|mut p| {
                        match child {
                            OptionalNode::Literal(chars) => push_literal(&mut p, chars),
                            OptionalNode::Wildcard => p.push(SimpleNode::Wildcard),
                        }
                        p
                    })
                    .collect();
                patterns.extend(with_child);
            }
        }
    }
    patterns
}

fn push_literal(pattern: &mut Vec<SimpleNode>, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    match pattern.last_mut() {
        Some(SimpleNode::Literal(existing)) => existing.extend_from_slice(chars),
        _ => pattern.push(SimpleNode::Literal(chars.to_vec())),
    }
}

/// Total number of characters a simplified pattern consumes.
pub fn simple_len(nodes: &[SimpleNode]) -> usize {
    nodes.iter().map(SimpleNode::len).sum()
}

#[cfg(test)]
#[path = "simplify_tests.rs"]
mod tests;
