//! Bounded recency memory used to avoid repeating questions and pushbacks

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: PartialEq + Clone> RecentHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an item, evicting the oldest once the capacity is reached
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }
}
