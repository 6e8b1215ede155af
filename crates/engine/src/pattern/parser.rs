// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser for the pattern language.

use std::iter::Peekable;
use std::str::Chars;

use super::ast::{Node, OptionalNode, ParsedPattern, SPECIAL_CHARS};

/// A syntax error in pattern source, positioned by 1-based line and column.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct ParserError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Parse pattern source into a [`ParsedPattern`].
pub fn parse(input: &str) -> Result<ParsedPattern, ParserError> {
    Parser {
        chars: input.chars().peekable(),
        line: 1,
        column: 1,
    }
    .parse_pattern()
}

#[derive(Clone, Copy)]
struct Position {
    line: usize,
    column: usize,
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    /// Position of the next unread character.
    line: usize,
    column: usize,
}

impl Parser<'_> {
    fn parse_pattern(&mut self) -> Result<ParsedPattern, ParserError> {
        let mut pattern = ParsedPattern::default();

        if self.chars.peek() == Some(&'|') {
            self.advance();
            pattern.require_word_boundary_at_start = true;
        }

        loop {
            let pos = self.position();
            match self.advance() {
                None => break,
                Some('|') => {
                    if self.chars.peek().is_some() {
                        return Err(error(
                            pos,
                            "boundary assertions are only allowed at the start or end of a pattern",
                        ));
                    }
                    pattern.require_word_boundary_at_end = true;
                }
                Some('[') => {
                    let optional = self.parse_optional(pos)?;
                    pattern.nodes.push(Node::Optional(optional));
                }
                Some(']') => return Err(error(pos, "unexpected ']' with no matching '['")),
                Some('?') => pattern.nodes.push(Node::Wildcard),
                Some('\\') => {
                    let c = self.parse_escape(pos)?;
                    push_literal(&mut pattern.nodes, c);
                }
                Some(c) => push_literal(&mut pattern.nodes, c),
            }
        }

        Ok(pattern)
    }

    /// Parse the body of `[...]`; the opening bracket is already consumed.
    fn parse_optional(&mut self, open: Position) -> Result<OptionalNode, ParserError> {
        let mut chars = Vec::new();
        let mut wildcard = false;

        loop {
            let pos = self.position();
            match self.advance() {
                None => return Err(error(pos, "unclosed optional; expected ']'")),
                Some(']') => break,
                Some('[') => return Err(error(pos, "nested optionals are not supported")),
                Some('|') => {
                    return Err(error(
                        pos,
                        "boundary assertions are not allowed inside an optional",
                    ));
                }
                Some('?') => {
                    if wildcard || !chars.is_empty() {
                        return Err(error(pos, MIXED_OPTIONAL));
                    }
                    wildcard = true;
                }
                Some('\\') => {
                    let c = self.parse_escape(pos)?;
                    if wildcard {
                        return Err(error(pos, MIXED_OPTIONAL));
                    }
                    chars.push(c);
                }
                Some(c) => {
                    if wildcard {
                        return Err(error(pos, MIXED_OPTIONAL));
                    }
                    chars.push(c);
                }
            }
        }

        if wildcard {
            Ok(OptionalNode::Wildcard)
        } else if chars.is_empty() {
            Err(error(open, "empty optional"))
        } else {
            Ok(OptionalNode::Literal(chars))
        }
    }

    /// Parse the character after `\`; `backslash` is where the escape began.
    fn parse_escape(&mut self, backslash: Position) -> Result<char, ParserError> {
        let pos = self.position();
        match self.advance() {
            None => Err(error(backslash, "unexpected end of pattern after '\\'")),
            Some(c) if SPECIAL_CHARS.contains(&c) => Ok(c),
            Some(c) => Err(error(
                pos,
                &format!("cannot escape '{c}'; only \\, [, ], ? and | may be escaped"),
            )),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

const MIXED_OPTIONAL: &str = "an optional may wrap a single literal run or a single wildcard";

fn push_literal(nodes: &mut Vec<Node>, c: char) {
    if let Some(Node::Literal(chars)) = nodes.last_mut() {
        chars.push(c);
    } else {
        nodes.push(Node::Literal(vec![c]));
    }
}

fn error(pos: Position, message: &str) -> ParserError {
    ParserError {
        message: message.to_string(),
        line: pos.line,
        column: pos.column,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
