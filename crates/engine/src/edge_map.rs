// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adaptive map from character to child, used for trie edges.
//!
//! Most trie nodes have one or two children, a few near the root have many.
//! The map picks its backing from its size and key profile:
//! - up to [`ARRAY_THRESHOLD`] entries: unsorted array, linear lookup
//! - more, all keys `a..=z`: 26-slot bucket array indexed by `key - 'a'`
//! - otherwise: hash map

use std::collections::HashMap;

/// Largest size kept in the linear array.
pub const ARRAY_THRESHOLD: usize = 10;

const BUCKET_COUNT: usize = 26;

/// Which structure currently backs an [`EdgeMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    Array,
    Bucket,
    Hash,
}

/// Pick the backing for a map of `len` entries whose keys are all lowercase
/// ASCII letters iff `all_lowercase`.
pub fn choose_backing(len: usize, all_lowercase: bool) -> Backing {
    if len <= ARRAY_THRESHOLD {
        Backing::Array
    } else if all_lowercase {
        Backing::Bucket
    } else {
        Backing::Hash
    }
}

#[derive(Debug, Clone)]
enum Store<V> {
    Array(Vec<(char, V)>),
    Bucket(Box<[Option<V>; BUCKET_COUNT]>),
    Hash(HashMap<char, V>),
}

#[derive(Debug, Clone)]
pub struct EdgeMap<V> {
    store: Store<V>,
    len: usize,
    all_lowercase: bool,
}

impl<V: Copy> Default for EdgeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn bucket_index(key: char) -> Option<usize> {
    key.is_ascii_lowercase()
        .then(|| (key as usize) - ('a' as usize))
}

impl<V: Copy> EdgeMap<V> {
    pub fn new() -> Self {
        Self {
            store: Store::Array(Vec::new()),
            len: 0,
            all_lowercase: true,
        }
    }

    pub fn get(&self, key: char) -> Option<V> {
        match &self.store {
            Store::Array(entries) => entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v),
            Store::Bucket(buckets) => bucket_index(key).and_then(|i| buckets[i]),
            Store::Hash(map) => map.get(&key).copied(),
        }
    }

    pub fn set(&mut self, key: char, value: V) {
        if let Some(slot) = self.get_mut(key) {
            *slot = value;
            return;
        }

        self.all_lowercase &= key.is_ascii_lowercase();
        let target = choose_backing(self.len + 1, self.all_lowercase);
        if target != self.backing() {
            self.migrate(target);
        }

        match &mut self.store {
            Store::Array(entries) => entries.push((key, value)),
            Store::Bucket(buckets) => {
                // Only reachable with lowercase keys, see `choose_backing`.
                if let Some(i) = bucket_index(key) {
                    buckets[i] = Some(value);
                }
            }
            Store::Hash(map) => {
                map.insert(key, value);
            }
        }
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn backing(&self) -> Backing {
        match self.store {
            Store::Array(_) => Backing::Array,
            Store::Bucket(_) => Backing::Bucket,
            Store::Hash(_) => Backing::Hash,
        }
    }

    /// Entries in no particular order; the order may change after a `set`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (char, V)> + '_> {
        match &self.store {
            Store::Array(entries) => Box::new(entries.iter().copied()),
            Store::Bucket(buckets) => Box::new(
                ('a'..='z')
                    .zip(buckets.iter())
                    .filter_map(|(k, v)| v.map(|v| (k, v))),
            ),
            Store::Hash(map) => Box::new(map.iter().map(|(k, v)| (*k, *v))),
        }
    }

    fn get_mut(&mut self, key: char) -> Option<&mut V> {
        match &mut self.store {
            Store::Array(entries) => entries.iter_mut().find(|(k, _)| *k == key).map(|(_, v)| v),
            Store::Bucket(buckets) => match bucket_index(key) {
                Some(i) => buckets[i].as_mut(),
                None => None,
            },
            Store::Hash(map) => map.get_mut(&key),
        }
    }

    fn migrate(&mut self, target: Backing) {
        let entries: Vec<(char, V)> = self.iter().collect();
        tracing::trace!(
            "edge map of {} entries moving from {:?} to {:?}",
            entries.len(),
            self.backing(),
            target
        );
        self.store = match target {
            Backing::Array => Store::Array(entries),
            Backing::Bucket => {
                let mut buckets = Box::new([None; BUCKET_COUNT]);
                for (key, value) in entries {
                    if let Some(i) = bucket_index(key) {
                        buckets[i] = Some(value);
                    }
                }
                Store::Bucket(buckets)
            }
            Backing::Hash => Store::Hash(entries.into_iter().collect()),
        };
    }
}

#[cfg(test)]
#[path = "edge_map_tests.rs"]
mod tests;
