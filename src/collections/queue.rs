//! `Queue` — a FIFO adapter over [`List`].
//!
//! This is the frontier shape breadth-first search consumes: enqueue at the
//! back, dequeue at the front, both O(1).

use core::fmt;

use crate::collections::List;

/// A first-in, first-out queue.
pub struct Queue<T> {
    items: List<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { items: List::new() }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.append(value);
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
