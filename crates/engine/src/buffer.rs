// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity ring buffer of recent values.

/// Remembers the last `capacity` values pushed; older values are overwritten.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    /// Slot the next push writes to.
    head: usize,
    len: usize,
}

impl<T: Copy> CircularBuffer<T> {
    /// Create an empty buffer. A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.data.len() < self.capacity {
            self.data.push(value);
        } else {
            self.data[self.head] = value;
        }
        self.head = (self.head + 1) % self.capacity;
        self.len = (self.len + 1).min(self.capacity);
    }

    /// The value pushed `back` pushes ago; `get(0)` is the most recent.
    pub fn get(&self, back: usize) -> Option<T> {
        if back >= self.len {
            return None;
        }
        let idx = (self.head + self.capacity - 1 - back) % self.capacity;
        self.data.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.head = 0;
        self.len = 0;
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
