//! `Stack` — a LIFO adapter over [`List`].
//!
//! This is the frontier shape depth-first search consumes: push and pop at
//! the front, both O(1).

use core::fmt;

use crate::collections::List;

/// A last-in, first-out stack.
pub struct Stack<T> {
    items: List<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: List::new() }
    }

    /// Returns the number of stacked elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is stacked.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an element onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.prepend(value);
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the top element, or `None` if empty.
    pub fn top(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
