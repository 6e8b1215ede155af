// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use std::collections::HashMap;

#[test]
fn small_map_is_array_backed() {
    let mut map = EdgeMap::new();
    map.set('x', 1u32);
    map.set('Y', 2);
    assert_eq!(map.backing(), Backing::Array);
    assert_eq!(map.get('x'), Some(1));
    assert_eq!(map.get('Y'), Some(2));
    assert_eq!(map.get('z'), None);
}

#[test]
fn overwrite_keeps_len() {
    let mut map = EdgeMap::new();
    map.set('a', 1u32);
    map.set('a', 5);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get('a'), Some(5));
}

#[test]
fn lowercase_keys_promote_to_buckets() {
    let mut map = EdgeMap::new();
    for (i, c) in ('a'..='k').enumerate() {
        map.set(c, i as u32);
    }
    assert_eq!(map.len(), ARRAY_THRESHOLD + 1);
    assert_eq!(map.backing(), Backing::Bucket);
    assert_eq!(map.get('k'), Some(10));
    assert_eq!(map.get('A'), None);
}

#[test]
fn mixed_keys_promote_to_hash() {
    let mut map = EdgeMap::new();
    for (i, c) in "abcdefghiJK".chars().enumerate() {
        map.set(c, i as u32);
    }
    assert_eq!(map.backing(), Backing::Hash);
    assert_eq!(map.get('K'), Some(10));
}

#[test]
fn non_lowercase_key_forces_bucket_fallback() {
    let mut map = EdgeMap::new();
    for (i, c) in ('a'..='m').enumerate() {
        map.set(c, i as u32);
    }
    assert_eq!(map.backing(), Backing::Bucket);
    map.set('0', 99);
    assert_eq!(map.backing(), Backing::Hash);
    for (i, c) in ('a'..='m').enumerate() {
        assert_eq!(map.get(c), Some(i as u32));
    }
    assert_eq!(map.get('0'), Some(99));
}

#[test]
fn bucket_iter_yields_all_entries() {
    let mut map = EdgeMap::new();
    for (i, c) in ('a'..='z').enumerate() {
        map.set(c, i as u32);
    }
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort();
    assert_eq!(entries.len(), 26);
    assert_eq!(entries[25], ('z', 25));
}

#[test]
fn choose_backing_profiles() {
    assert_eq!(choose_backing(ARRAY_THRESHOLD, false), Backing::Array);
    assert_eq!(choose_backing(ARRAY_THRESHOLD + 1, true), Backing::Bucket);
    assert_eq!(choose_backing(ARRAY_THRESHOLD + 1, false), Backing::Hash);
}

proptest! {
    #[test]
    fn behaves_like_a_hash_map(ops in proptest::collection::vec((any::<char>(), any::<u32>()), 0..80)) {
        let mut map = EdgeMap::new();
        let mut model = HashMap::new();
        for (k, v) in ops {
            map.set(k, v);
            model.insert(k, v);
            prop_assert_eq!(map.len(), model.len());
        }
        for (k, v) in &model {
            prop_assert_eq!(map.get(*k), Some(*v));
        }
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort();
        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn lowercase_heavy_maps_behave(ops in proptest::collection::vec((proptest::char::range('a', 'z'), any::<u8>()), 0..60)) {
        let mut map = EdgeMap::new();
        let mut model = HashMap::new();
        for (k, v) in ops {
            map.set(k, v);
            model.insert(k, v);
        }
        for (k, v) in &model {
            prop_assert_eq!(map.get(*k), Some(*v));
        }
        prop_assert_eq!(map.len(), model.len());
    }
}
