// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline matcher that compiles each term to a regular expression.
//!
//! Scans cost one pass per term, so this is slower than
//! [`AutomatonMatcher`](super::AutomatonMatcher) for large term sets, but it is
//! simple enough to serve as a reference for it.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::interval::{Interval, IntervalSet};
use crate::pattern::{Node, OptionalNode, ParsedPattern};
use crate::transform::{TransformedText, TransformerPipeline};

use super::whitelist::WhitelistAutomaton;
use super::{MatchPayload, Matcher, MatcherOptions, compare_match_by_position, prepare_terms};

const NOT_PRECEDED_BY_WORD: &str = "(?<![A-Za-z0-9])";
const NOT_FOLLOWED_BY_WORD: &str = "(?![A-Za-z0-9])";

/// A term's regex, compiled with the cheapest engine that supports it.
#[derive(Debug, Clone)]
enum CompiledRegex {
    /// No boundary assertions; the linear-time engine suffices.
    Plain(::regex::Regex),
    /// Boundary assertions need lookaround, which only the backtracking
    /// engine supports.
    Lookaround(fancy_regex::Regex),
}

impl CompiledRegex {
    fn compile(pattern: &ParsedPattern) -> std::result::Result<Self, String> {
        let source = pattern_to_regex(pattern);
        if pattern.require_word_boundary_at_start || pattern.require_word_boundary_at_end {
            fancy_regex::Regex::new(&source)
                .map(CompiledRegex::Lookaround)
                .map_err(|e| e.to_string())
        } else {
            ::regex::Regex::new(&source)
                .map(CompiledRegex::Plain)
                .map_err(|e| e.to_string())
        }
    }

    /// Leftmost match starting at or after byte `pos`.
    fn find_at(&self, text: &str, pos: usize) -> std::result::Result<Option<Range<usize>>, String> {
        match self {
            CompiledRegex::Plain(re) => Ok(re.find_at(text, pos).map(|m| m.range())),
            CompiledRegex::Lookaround(re) => re
                .find_from_pos(text, pos)
                .map(|found| found.map(|m| m.range()))
                .map_err(|e| e.to_string()),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            CompiledRegex::Plain(re) => re.as_str(),
            CompiledRegex::Lookaround(re) => re.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledTerm {
    id: i64,
    regex: CompiledRegex,
}

/// Translate a parsed pattern into regex syntax.
///
/// Wildcards become `.` (with `s` so they also match newlines), optionals
/// become `(?:...)?` and word boundaries become ASCII alphanumeric
/// lookarounds.
pub fn pattern_to_regex(pattern: &ParsedPattern) -> String {
    let mut out = String::from("(?s)");
    if pattern.require_word_boundary_at_start {
        out.push_str(NOT_PRECEDED_BY_WORD);
    }
    for node in &pattern.nodes {
        match node {
            Node::Literal(chars) => out.push_str(&escape_literal(chars)),
            Node::Wildcard => out.push('.'),
            Node::Optional(OptionalNode::Literal(chars)) => {
                out.push_str("(?:");
                out.push_str(&escape_literal(chars));
                out.push_str(")?");
            }
            Node::Optional(OptionalNode::Wildcard) => out.push_str("(?:.)?"),
        }
    }
    if pattern.require_word_boundary_at_end {
        out.push_str(NOT_FOLLOWED_BY_WORD);
    }
    out
}

fn escape_literal(chars: &[char]) -> String {
    let run: String = chars.iter().collect();
    ::regex::escape(&run)
}

/// Transformed input plus what is needed to map regex offsets back to it.
struct Haystack {
    transformed: TransformedText,
    text: String,
    /// Byte offset in `text` of each transformed character.
    char_starts: Vec<usize>,
    whitelisted: IntervalSet,
}

impl Haystack {
    /// Index of the transformed character containing byte `offset` of `text`.
    fn char_index(&self, offset: usize) -> usize {
        self.char_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }
}

/// Matcher compiling every blacklisted term to its own regex.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    terms: Vec<CompiledTerm>,
    whitelist: WhitelistAutomaton,
    blacklist_transformers: TransformerPipeline,
}

impl RegexMatcher {
    /// Build from `options`. The forked-traversal limit has no meaning here
    /// and is ignored.
    pub fn new(options: MatcherOptions) -> Result<Self> {
        let prepared = prepare_terms(&options.blacklisted_terms)?;
        let mut terms = Vec::with_capacity(prepared.len());
        for term in &prepared {
            let regex = CompiledRegex::compile(term.pattern).map_err(|message| {
                Error::InvalidRegex {
                    id: term.id,
                    message,
                }
            })?;
            terms.push(CompiledTerm { id: term.id, regex });
        }
        let whitelist =
            WhitelistAutomaton::new(&options.whitelisted_terms, options.whitelist_transformers)?;

        tracing::debug!(
            "compiled {} terms to regexes ({} with lookaround)",
            terms.len(),
            terms
                .iter()
                .filter(|t| matches!(t.regex, CompiledRegex::Lookaround(_)))
                .count()
        );

        Ok(Self {
            terms,
            whitelist,
            blacklist_transformers: options.blacklist_transformers,
        })
    }

    /// Regex source for each term, in construction order.
    pub fn sources(&self) -> impl Iterator<Item = (i64, &str)> {
        self.terms.iter().map(|t| (t.id, t.regex.as_str()))
    }

    fn haystack(&self, input: &str) -> Haystack {
        let transformed = self.blacklist_transformers.apply(input);
        let mut text = String::with_capacity(transformed.len());
        let mut char_starts = Vec::with_capacity(transformed.len());
        for &c in &transformed.chars {
            char_starts.push(text.len());
            text.push(c);
        }
        Haystack {
            transformed,
            text,
            char_starts,
            whitelisted: self.whitelist.scan(input),
        }
    }

    /// Every match of `term`, trying each transformed character as a start
    /// so overlapping occurrences are found.
    fn scan_term(
        &self,
        term: &CompiledTerm,
        haystack: &Haystack,
        stop_at_first: bool,
        found: &mut Vec<MatchPayload>,
    ) -> Result<()> {
        let text = haystack.text.as_str();
        let mut pos = 0;
        while pos < text.len() {
            let Some(range) = term
                .regex
                .find_at(text, pos)
                .map_err(|message| Error::RegexScan {
                    id: term.id,
                    message,
                })?
            else {
                break;
            };

            let first = haystack.char_index(range.start);
            let last = haystack.char_index(range.end.saturating_sub(1).max(range.start));
            if let Some(span) = haystack.transformed.source_span(first, last)
                && !haystack
                    .whitelisted
                    .fully_contains(Interval::new(span.start, span.end))
            {
                found.push(MatchPayload {
                    term_id: term.id,
                    match_length: last - first + 1,
                    start_index: span.start,
                    end_index: span.end,
                });
                if stop_at_first {
                    return Ok(());
                }
            }

            pos = range.start + text[range.start..].chars().next().map_or(1, char::len_utf8);
        }
        Ok(())
    }
}

impl Matcher for RegexMatcher {
    /// First accepted match of the earliest term that has one.
    fn first_match(&self, input: &str) -> Result<Option<MatchPayload>> {
        let haystack = self.haystack(input);
        let mut found = Vec::with_capacity(1);
        for term in &self.terms {
            self.scan_term(term, &haystack, true, &mut found)?;
            if let Some(&first) = found.first() {
                return Ok(Some(first));
            }
        }
        Ok(None)
    }

    fn get_all_matches(&self, input: &str, sorted: bool) -> Result<Vec<MatchPayload>> {
        let haystack = self.haystack(input);
        let mut found = Vec::new();
        for term in &self.terms {
            self.scan_term(term, &haystack, false, &mut found)?;
        }
        if sorted {
            found.sort_by(compare_match_by_position);
        }
        Ok(found)
    }
}

#[cfg(test)]
#[path = "regex_tests.rs"]
mod tests;
