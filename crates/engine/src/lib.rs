// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blacklist/whitelist pattern matching over obfuscated text.
//!
//! Terms are written in a small pattern language (see [`pattern`]), compiled
//! into an [`AutomatonMatcher`] that scans input once regardless of term
//! count, and reported as [`MatchPayload`]s carrying byte offsets into the
//! original input. Transformer pipelines normalize input (case, leet-speak,
//! look-alike characters, repeated letters) before matching, and whitelisted
//! strings suppress blacklist matches they fully contain.
//!
//! ```
//! use wordsieve::{AutomatonMatcher, Matcher, MatcherOptions, assign_incrementing_ids, parse};
//!
//! let terms = assign_incrementing_ids([parse("|beans").unwrap()]);
//! let matcher = AutomatonMatcher::new(MatcherOptions::new(terms)).unwrap();
//! let found = matcher.get_all_matches("delicious beans", true).unwrap();
//! assert_eq!((found[0].start_index, found[0].end_index), (10, 14));
//! ```

pub mod buffer;
pub mod config;
pub mod edge_map;
pub mod error;
pub mod interval;
pub mod matcher;
pub mod pattern;
pub mod transform;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use matcher::{
    AutomatonMatcher, DEFAULT_FORKED_TRAVERSAL_LIMIT, MatchCursor, MatchPayload, Matcher,
    MatcherOptions, RegexMatcher, WhitelistAutomaton, compare_match_by_position,
};
pub use pattern::{BlacklistedTerm, ParsedPattern, ParserError, assign_incrementing_ids, parse};
pub use transform::{StatefulTransformer, Transformer, TransformerPipeline};
