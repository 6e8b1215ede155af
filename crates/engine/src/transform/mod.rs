// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character transformer pipeline.
//!
//! Input text passes through an ordered chain of character-level transforms
//! before matching. A transform maps a character to another or drops it.
//! Stateful transforms (duplicate collapsing) keep memory between characters;
//! the pipeline itself holds only their factories, so every scan gets fresh
//! state and a shared matcher never carries memory across scans.

pub mod builtin;

use std::fmt;
use std::sync::Arc;

/// A transform with memory across characters.
pub trait StatefulTransformer: Send {
    /// Map `c`, or return `None` to drop it.
    fn transform(&mut self, c: char) -> Option<char>;

    /// Forget everything seen so far.
    fn reset(&mut self);
}

type MapFn = dyn Fn(char) -> Option<char> + Send + Sync;
type FactoryFn = dyn Fn() -> Box<dyn StatefulTransformer> + Send + Sync;

#[derive(Clone)]
pub enum Transformer {
    Stateless(Arc<MapFn>),
    Stateful(Arc<FactoryFn>),
}

impl Transformer {
    pub fn stateless(f: impl Fn(char) -> Option<char> + Send + Sync + 'static) -> Self {
        Transformer::Stateless(Arc::new(f))
    }

    pub fn stateful<T: StatefulTransformer + 'static>(
        factory: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        Transformer::Stateful(Arc::new(move || -> Box<dyn StatefulTransformer> {
            Box::new(factory())
        }))
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformer::Stateless(_) => f.write_str("Transformer::Stateless"),
            Transformer::Stateful(_) => f.write_str("Transformer::Stateful"),
        }
    }
}

/// Ordered list of transformers.
#[derive(Debug, Clone, Default)]
pub struct TransformerPipeline {
    transformers: Vec<Transformer>,
}

impl TransformerPipeline {
    pub fn new(transformers: Vec<Transformer>) -> Self {
        Self { transformers }
    }

    pub fn push(&mut self, transformer: Transformer) {
        self.transformers.push(transformer);
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Instantiate per-scan state.
    pub fn start(&self) -> PipelineRun<'_> {
        let stages = self
            .transformers
            .iter()
            .map(|t| match t {
                Transformer::Stateless(f) => Stage::Stateless(f.as_ref()),
                Transformer::Stateful(factory) => Stage::Stateful(factory()),
            })
            .collect();
        PipelineRun { stages }
    }

    /// Convenience for one-off transformation of a whole string.
    pub fn apply(&self, input: &str) -> TransformedText {
        self.start().apply(input)
    }
}

impl FromIterator<Transformer> for TransformerPipeline {
    fn from_iter<I: IntoIterator<Item = Transformer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

enum Stage<'p> {
    Stateless(&'p MapFn),
    Stateful(Box<dyn StatefulTransformer>),
}

/// A pipeline with live per-scan state.
pub struct PipelineRun<'p> {
    stages: Vec<Stage<'p>>,
}

impl PipelineRun<'_> {
    /// Feed one character through every stage, stopping at the first drop.
    pub fn transform(&mut self, c: char) -> Option<char> {
        let mut current = c;
        for stage in &mut self.stages {
            current = match stage {
                Stage::Stateless(f) => (*f)(current)?,
                Stage::Stateful(t) => t.transform(current)?,
            };
        }
        Some(current)
    }

    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            if let Stage::Stateful(t) = stage {
                t.reset();
            }
        }
    }

    /// Transform `input` lazily, pairing each output character with the
    /// source span it came from. State is reset first.
    pub fn chars<'s>(
        &'s mut self,
        input: &'s str,
    ) -> impl Iterator<Item = (char, SourceSpan)> + 's {
        self.reset();
        input.char_indices().filter_map(move |(start, c)| {
            let out = self.transform(c)?;
            Some((out, SourceSpan::of_char(start, c)))
        })
    }

    /// Transform all of `input` eagerly.
    pub fn apply(&mut self, input: &str) -> TransformedText {
        let (chars, spans) = self.chars(input).unzip();
        TransformedText { chars, spans }
    }
}

/// Inclusive byte range in the source string, always on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    /// Index of the last byte of the source character.
    pub end: usize,
}

impl SourceSpan {
    pub fn of_char(start: usize, c: char) -> Self {
        Self {
            start,
            end: start + c.len_utf8() - 1,
        }
    }
}

/// Output of a pipeline over a whole string, with the index mapping back to
/// the source: `spans[i]` is where `chars[i]` came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformedText {
    pub chars: Vec<char>,
    pub spans: Vec<SourceSpan>,
}

impl TransformedText {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Source span covering transformed characters `first..=last`.
    pub fn source_span(&self, first: usize, last: usize) -> Option<SourceSpan> {
        let start = self.spans.get(first)?.start;
        let end = self.spans.get(last)?.end;
        Some(SourceSpan { start, end })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
