// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn empty_pipeline_is_identity() {
    let out = TransformerPipeline::default().apply("abc");
    assert_eq!(out.text(), "abc");
    assert_eq!(out.spans[2], SourceSpan { start: 2, end: 2 });
}

#[test]
fn stages_run_in_order() {
    let pipeline = TransformerPipeline::new(vec![
        Transformer::stateless(|c| Some(if c == 'a' { 'b' } else { c })),
        Transformer::stateless(|c| Some(if c == 'b' { 'c' } else { c })),
    ]);
    assert_eq!(pipeline.apply("ab").text(), "cc");
}

#[test]
fn skip_short_circuits_later_stages() {
    static SEEN: AtomicUsize = AtomicUsize::new(0);
    let pipeline = TransformerPipeline::new(vec![
        Transformer::stateless(|c| (c != 'x').then_some(c)),
        Transformer::stateless(|c| {
            SEEN.fetch_add(1, Ordering::SeqCst);
            Some(c)
        }),
    ]);
    assert_eq!(pipeline.apply("axxb").text(), "ab");
    assert_eq!(SEEN.load(Ordering::SeqCst), 2);
}

#[test]
fn spans_map_back_through_deletions() {
    let pipeline = TransformerPipeline::new(vec![Transformer::stateless(|c| {
        (c != '-').then_some(c)
    })]);
    let out = pipeline.apply("a--b");
    assert_eq!(out.text(), "ab");
    assert_eq!(out.spans, vec![SourceSpan { start: 0, end: 0 }, SourceSpan { start: 3, end: 3 }]);
    assert_eq!(out.source_span(0, 1), Some(SourceSpan { start: 0, end: 3 }));
}

#[test]
fn spans_cover_multibyte_characters() {
    let out = TransformerPipeline::default().apply("é𝐚x");
    assert_eq!(out.spans[0], SourceSpan { start: 0, end: 1 });
    assert_eq!(out.spans[1], SourceSpan { start: 2, end: 5 });
    assert_eq!(out.spans[2], SourceSpan { start: 6, end: 6 });
}

struct CountingTransformer {
    count: usize,
}

impl StatefulTransformer for CountingTransformer {
    fn transform(&mut self, c: char) -> Option<char> {
        self.count += 1;
        (self.count % 2 == 1).then_some(c)
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

#[test]
fn each_run_gets_fresh_state() {
    let pipeline = TransformerPipeline::new(vec![Transformer::stateful(|| CountingTransformer {
        count: 0,
    })]);
    let mut first = pipeline.start();
    let mut second = pipeline.start();
    assert_eq!(first.transform('a'), Some('a'));
    assert_eq!(first.transform('b'), None);
    // The second run has not seen anything yet.
    assert_eq!(second.transform('c'), Some('c'));
}

#[test]
fn chars_resets_before_iterating() {
    let pipeline = TransformerPipeline::new(vec![Transformer::stateful(|| CountingTransformer {
        count: 0,
    })]);
    let mut run = pipeline.start();
    run.transform('z');
    let out: String = run.chars("abcd").map(|(c, _)| c).collect();
    assert_eq!(out, "ac");
}

#[test]
fn pipeline_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransformerPipeline>();
}
