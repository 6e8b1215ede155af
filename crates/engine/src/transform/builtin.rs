// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in transformers and the recommended English pipelines.

use std::collections::HashMap;
use std::sync::Arc;

use unicode_normalization::char::decompose_compatible;

use super::{StatefulTransformer, Transformer, TransformerPipeline};

/// ASCII-only lowercasing; other characters pass through untouched.
pub fn to_ascii_lower_case() -> Transformer {
    Transformer::stateless(|c| Some(c.to_ascii_lowercase()))
}

/// Drop everything except ASCII letters.
pub fn skip_non_alphabetic() -> Transformer {
    Transformer::stateless(|c| c.is_ascii_alphabetic().then_some(c))
}

/// Map characters onto replacements. Each entry is `(target, sources)`:
/// every character of `sources` becomes `target`.
pub fn remap_characters<'a>(entries: impl IntoIterator<Item = (char, &'a str)>) -> Transformer {
    let map = build_remap(entries);
    Transformer::stateless(move |c| Some(map.get(&c).copied().unwrap_or(c)))
}

fn build_remap<'a>(entries: impl IntoIterator<Item = (char, &'a str)>) -> HashMap<char, char> {
    let mut map = HashMap::new();
    for (target, sources) in entries {
        for source in sources.chars() {
            map.insert(source, target);
        }
    }
    map
}

const LEET_SPEAK: &[(char, &str)] = &[
    ('a', "@4"),
    ('c', "("),
    ('e', "3"),
    ('g', "6"),
    ('i', "1|!"),
    ('o', "0"),
    ('s', "$5"),
    ('t', "7"),
    ('z', "2"),
];

/// Undo common leet-speak substitutions (`@` → `a`, `3` → `e`, ...).
pub fn resolve_leet_speak() -> Transformer {
    remap_characters(LEET_SPEAK.iter().copied())
}

/// Look-alikes that have no compatibility decomposition to ASCII.
const CONFUSABLES: &[(char, &str)] = &[
    ('a', "аαɑ"),
    ('b', "ьЬ"),
    ('c', "сϲ"),
    ('d', "ԁ"),
    ('e', "еε"),
    ('g', "ɡ"),
    ('h', "һ"),
    ('i', "іιı"),
    ('j', "ј"),
    ('k', "κ"),
    ('n', "η"),
    ('o', "оοσ"),
    ('p', "рρ"),
    ('s', "ѕ"),
    ('t', "τ"),
    ('u', "υ"),
    ('v', "ν"),
    ('x', "хχ"),
    ('y', "уγ"),
];

/// Fold Unicode look-alikes onto ASCII.
///
/// Characters with a compatibility decomposition starting with an ASCII
/// letter or digit (accented letters, fullwidth and mathematical forms,
/// circled letters) fold to that character; a small table covers Cyrillic and
/// Greek homoglyphs.
pub fn resolve_confusables() -> Transformer {
    let table = Arc::new(build_remap(CONFUSABLES.iter().copied()));
    Transformer::stateless(move |c| {
        if c.is_ascii() {
            return Some(c);
        }
        if let Some(&mapped) = table.get(&c) {
            return Some(mapped);
        }
        let mut first = None;
        decompose_compatible(c, |d| {
            if first.is_none() {
                first = Some(d);
            }
        });
        match first {
            Some(d) if d.is_ascii_alphanumeric() => Some(d),
            _ => Some(c),
        }
    })
}

/// Collapses runs of the same character.
///
/// The `n`-th consecutive occurrence of a character is kept while `n` is at
/// most the character's threshold, so a threshold of 1 turns `aaa` into `a`
/// and a threshold of 2 turns `ooo` into `oo`. A threshold of 0 drops the
/// character entirely.
#[derive(Debug, Clone)]
pub struct CollapseDuplicates {
    default_threshold: usize,
    custom_thresholds: Arc<HashMap<char, usize>>,
    last: Option<char>,
    run: usize,
}

impl CollapseDuplicates {
    pub fn new(default_threshold: usize, custom_thresholds: HashMap<char, usize>) -> Self {
        Self {
            default_threshold,
            custom_thresholds: Arc::new(custom_thresholds),
            last: None,
            run: 0,
        }
    }

    fn threshold(&self, c: char) -> usize {
        self.custom_thresholds
            .get(&c)
            .copied()
            .unwrap_or(self.default_threshold)
    }
}

impl StatefulTransformer for CollapseDuplicates {
    fn transform(&mut self, c: char) -> Option<char> {
        if self.last == Some(c) {
            self.run = self.run.saturating_add(1);
        } else {
            self.last = Some(c);
            self.run = 1;
        }
        (self.run <= self.threshold(c)).then_some(c)
    }

    fn reset(&mut self) {
        self.last = None;
        self.run = 0;
    }
}

/// Stateful duplicate collapsing; see [`CollapseDuplicates`].
pub fn collapse_duplicates(
    default_threshold: usize,
    custom_thresholds: HashMap<char, usize>,
) -> Transformer {
    let template = CollapseDuplicates::new(default_threshold, custom_thresholds);
    Transformer::stateful(move || {
        let mut fresh = template.clone();
        fresh.reset();
        fresh
    })
}

/// Letters that legitimately double in English words.
const ENGLISH_DOUBLES: &[char] = &['b', 'e', 'o', 'l', 's', 'g'];

/// Blacklist-side pipeline tuned for English text: confusables, leet-speak,
/// lowercasing, then duplicate collapsing (doubles allowed for common
/// doubled letters).
pub fn english_blacklist_pipeline() -> TransformerPipeline {
    let doubles = ENGLISH_DOUBLES.iter().map(|&c| (c, 2)).collect();
    TransformerPipeline::new(vec![
        resolve_confusables(),
        resolve_leet_speak(),
        to_ascii_lower_case(),
        collapse_duplicates(1, doubles),
    ])
}

/// Whitelist-side pipeline for English text: lowercasing and collapsing runs
/// of spaces.
pub fn english_whitelist_pipeline() -> TransformerPipeline {
    TransformerPipeline::new(vec![
        to_ascii_lower_case(),
        collapse_duplicates(usize::MAX, HashMap::from([(' ', 1)])),
    ])
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
