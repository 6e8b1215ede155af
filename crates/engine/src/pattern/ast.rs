// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! AST types for blacklist patterns.

use std::fmt;

/// A parsed pattern: a run of nodes plus optional word-boundary assertions
/// at either end.
///
/// `|bad` requires a boundary before the match, `bad|` after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPattern {
    pub require_word_boundary_at_start: bool,
    pub require_word_boundary_at_end: bool,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A run of characters matched exactly.
    Literal(Vec<char>),
    /// `?`: exactly one character, whatever it is.
    Wildcard,
    /// `[x]`: the wrapped node may or may not be present.
    Optional(OptionalNode),
}

/// The contents of an optional; optionals never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalNode {
    Literal(Vec<char>),
    Wildcard,
}

/// A node after optional expansion. Adjacent literals are always merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleNode {
    Literal(Vec<char>),
    Wildcard,
}

impl SimpleNode {
    /// Number of input characters this node consumes.
    pub fn len(&self) -> usize {
        match self {
            SimpleNode::Literal(chars) => chars.len(),
            SimpleNode::Wildcard => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ParsedPattern {
    /// True when every node is optional, i.e. the pattern can match nothing.
    pub fn potentially_matches_empty_string(&self) -> bool {
        self.nodes.iter().all(|n| matches!(n, Node::Optional(_)))
    }
}

/// Characters with special meaning in pattern source.
pub(crate) const SPECIAL_CHARS: &[char] = &['\\', '[', ']', '?', '|'];

fn write_literal(f: &mut fmt::Formatter<'_>, chars: &[char]) -> fmt::Result {
    for &c in chars {
        if SPECIAL_CHARS.contains(&c) {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

/// Renders the pattern back into source form; `parse(p.to_string()) == p`.
impl fmt::Display for ParsedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.require_word_boundary_at_start {
            write!(f, "|")?;
        }
        for node in &self.nodes {
            match node {
                Node::Literal(chars) => write_literal(f, chars)?,
                Node::Wildcard => write!(f, "?")?,
                Node::Optional(OptionalNode::Literal(chars)) => {
                    write!(f, "[")?;
                    write_literal(f, chars)?;
                    write!(f, "]")?;
                }
                Node::Optional(OptionalNode::Wildcard) => write!(f, "[?]")?,
            }
        }
        if self.require_word_boundary_at_end {
            write!(f, "|")?;
        }
        Ok(())
    }
}
