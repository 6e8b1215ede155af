// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Augmented AVL interval tree.
//!
//! Nodes live in a flat arena and are ordered by lower bound. Each node also
//! records the largest upper bound in its subtree, which lets containment
//! queries skip whole subtrees.

use super::Interval;

#[derive(Debug, Clone)]
struct TreeNode {
    interval: Interval,
    left: Option<usize>,
    right: Option<usize>,
    height: u32,
    max_upper: usize,
}

#[derive(Debug, Clone, Default)]
pub(super) struct IntervalTree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl IntervalTree {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn insert(&mut self, interval: Interval) {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            interval,
            left: None,
            right: None,
            height: 1,
            max_upper: interval.upper_bound,
        });
        self.root = Some(self.insert_at(self.root, id));
    }

    /// True if some stored interval covers `query` entirely.
    pub(super) fn fully_contains(&self, query: Interval) -> bool {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if node.max_upper < query.upper_bound {
                // Nothing in this subtree reaches far enough.
                return false;
            }
            if node.interval.lower_bound > query.lower_bound {
                cursor = node.left;
                continue;
            }
            // Every interval on the left starts no later than this one.
            if let Some(left) = node.left
                && self.nodes[left].max_upper >= query.upper_bound
            {
                return true;
            }
            if node.interval.upper_bound >= query.upper_bound {
                return true;
            }
            cursor = node.right;
        }
        false
    }

    /// Intervals in lower-bound order.
    pub(super) fn values(&self) -> Vec<Interval> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        while cursor.is_some() || !stack.is_empty() {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.nodes[id].left;
            }
            if let Some(id) = stack.pop() {
                out.push(self.nodes[id].interval);
                cursor = self.nodes[id].right;
            }
        }
        out
    }

    fn insert_at(&mut self, subtree: Option<usize>, id: usize) -> usize {
        let Some(root) = subtree else {
            return id;
        };
        if self.nodes[id].interval.lower_bound < self.nodes[root].interval.lower_bound {
            let left = self.insert_at(self.nodes[root].left, id);
            self.nodes[root].left = Some(left);
        } else {
            let right = self.insert_at(self.nodes[root].right, id);
            self.nodes[root].right = Some(right);
        }
        self.update(root);
        self.rebalance(root)
    }

    fn height(&self, node: Option<usize>) -> u32 {
        node.map_or(0, |id| self.nodes[id].height)
    }

    fn max_upper(&self, node: Option<usize>) -> Option<usize> {
        node.map(|id| self.nodes[id].max_upper)
    }

    fn update(&mut self, id: usize) {
        let (left, right) = (self.nodes[id].left, self.nodes[id].right);
        let height = 1 + self.height(left).max(self.height(right));
        let mut max_upper = self.nodes[id].interval.upper_bound;
        for child in [self.max_upper(left), self.max_upper(right)].into_iter().flatten() {
            max_upper = max_upper.max(child);
        }
        let node = &mut self.nodes[id];
        node.height = height;
        node.max_upper = max_upper;
    }

    fn balance_factor(&self, id: usize) -> i64 {
        i64::from(self.height(self.nodes[id].left)) - i64::from(self.height(self.nodes[id].right))
    }

    fn rebalance(&mut self, id: usize) -> usize {
        let balance = self.balance_factor(id);
        if balance > 1 {
            if let Some(left) = self.nodes[id].left
                && self.balance_factor(left) < 0
            {
                let rotated = self.rotate_left(left);
                self.nodes[id].left = Some(rotated);
            }
            return self.rotate_right(id);
        }
        if balance < -1 {
            if let Some(right) = self.nodes[id].right
                && self.balance_factor(right) > 0
            {
                let rotated = self.rotate_right(right);
                self.nodes[id].right = Some(rotated);
            }
            return self.rotate_left(id);
        }
        id
    }

    fn rotate_right(&mut self, id: usize) -> usize {
        let Some(pivot) = self.nodes[id].left else {
            return id;
        };
        self.nodes[id].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(id);
        self.update(id);
        self.update(pivot);
        pivot
    }

    fn rotate_left(&mut self, id: usize) -> usize {
        let Some(pivot) = self.nodes[id].right else {
            return id;
        };
        self.nodes[id].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(id);
        self.update(id);
        self.update(pivot);
        pivot
    }

    #[cfg(test)]
    pub(super) fn height_of_root(&self) -> u32 {
        self.height(self.root)
    }
}
