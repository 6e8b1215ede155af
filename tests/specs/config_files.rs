// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for matchers built from `wordsieve.toml`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::tempdir;
use wordsieve::config;

use crate::prelude::*;

const ENGLISH_CONFIG: &str = r#"
version = 1
whitelist = ["pen is", "scunthorpe"]

[[term]]
id = 10
pattern = "penis"

[[term]]
id = 11
pattern = "cunt"

[[term]]
id = 12
pattern = "|ass|"

[transformers]
blacklist = [
    { kind = "confusables" },
    { kind = "leet-speak" },
    { kind = "lowercase" },
    { kind = "collapse-duplicates", custom = { s = 2 } },
]
whitelist = [{ kind = "lowercase" }]
"#;

fn load_matcher(content: &str) -> AutomatonMatcher {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("wordsieve.toml");
    fs::write(&path, content).unwrap();
    let options = config::load_with_warnings(&path)
        .unwrap()
        .into_options()
        .unwrap();
    AutomatonMatcher::new(options).unwrap()
}

#[test]
fn config_file_builds_matcher() {
    let matcher = load_matcher(ENGLISH_CONFIG);
    let found = matcher
        .get_all_matches("SCUNTHORPE: the pen is mightier than the p3n1s, you 4ss", true)
        .unwrap();
    let ids: Vec<i64> = found.iter().map(|m| m.term_id).collect();
    assert_eq!(ids, vec![10, 12]);
}

#[test]
fn config_limit_is_applied() {
    let content = "version = 1\nforked_traversal_limit = 0\n[[term]]\nid = 1\npattern = \"?\"\n";
    let matcher = load_matcher(content);
    assert_eq!(matcher.forked_traversal_limit(), 0);
    assert!(matcher.has_match("x").is_err());
}

#[test]
fn bad_version_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wordsieve.toml");
    fs::write(&path, "version = 3\n").unwrap();
    let err = config::load(&path).unwrap_err();
    match err {
        Error::Config {
            path: Some(p),
            message,
        } => {
            assert_eq!(p, path);
            assert!(message.contains("unsupported config version 3"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
