// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interval containment index.
//!
//! Answers "is `[lo, hi]` fully inside some inserted interval?". Small sets
//! are scanned linearly; once [`TREE_THRESHOLD`] intervals are stored the set
//! migrates into an augmented interval tree. Intervals are never removed, so
//! the migration happens at most once.

mod tree;

use tree::IntervalTree;

/// Size at which the linear list is promoted to a tree.
pub const TREE_THRESHOLD: usize = 10;

/// A closed interval `[lower_bound, upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub lower_bound: usize,
    pub upper_bound: usize,
}

impl Interval {
    pub fn new(lower_bound: usize, upper_bound: usize) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    pub fn contains(&self, other: Interval) -> bool {
        self.lower_bound <= other.lower_bound && other.upper_bound <= self.upper_bound
    }
}

/// Which structure currently backs an [`IntervalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    Linear,
    Tree,
}

/// Pick the backing for a set holding `len` intervals.
pub fn choose_backing(len: usize) -> Backing {
    if len < TREE_THRESHOLD {
        Backing::Linear
    } else {
        Backing::Tree
    }
}

#[derive(Debug, Clone)]
enum Store {
    Linear(Vec<Interval>),
    Tree(IntervalTree),
}

/// Append-only set of intervals with containment queries.
#[derive(Debug, Clone)]
pub struct IntervalSet {
    store: Store,
}

impl Default for IntervalSet {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalSet {
    pub fn new() -> Self {
        Self {
            store: Store::Linear(Vec::new()),
        }
    }

    pub fn insert(&mut self, interval: Interval) {
        match &mut self.store {
            Store::Linear(list) => list.push(interval),
            Store::Tree(tree) => tree.insert(interval),
        }
        if self.backing() != choose_backing(self.len()) {
            self.migrate();
        }
    }

    /// True if some inserted interval `i` has
    /// `i.lower_bound <= query.lower_bound && query.upper_bound <= i.upper_bound`.
    pub fn fully_contains(&self, query: Interval) -> bool {
        match &self.store {
            Store::Linear(list) => list.iter().any(|i| i.contains(query)),
            Store::Tree(tree) => tree.fully_contains(query),
        }
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Linear(list) => list.len(),
            Store::Tree(tree) => tree.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored intervals. Order depends on the current backing.
    pub fn values(&self) -> Vec<Interval> {
        match &self.store {
            Store::Linear(list) => list.clone(),
            Store::Tree(tree) => tree.values(),
        }
    }

    pub fn backing(&self) -> Backing {
        match self.store {
            Store::Linear(_) => Backing::Linear,
            Store::Tree(_) => Backing::Tree,
        }
    }

    fn migrate(&mut self) {
        if let Store::Linear(list) = &mut self.store {
            tracing::trace!("promoting interval set of {} to tree", list.len());
            let mut tree = IntervalTree::new();
            for interval in list.drain(..) {
                tree.insert(interval);
            }
            self.store = Store::Tree(tree);
        }
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
