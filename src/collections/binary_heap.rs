//! `BinaryHeap` — a priority queue implemented with a binary max-heap.
//!
//! Backed by [`Array`], with the usual implicit-tree layout: the children of
//! the element at `i` sit at `2i + 1` and `2i + 2`. The greatest element is
//! always at the top.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push` | O(log n) | Sift up |
//! | `pop` | O(log n) | Sift down from root |
//! | `top` | O(1) | |
//! | `merge` | O(m log(n + m)) | Pushes every element of `other` |

use crate::collections::Array;

/// A max-heap priority queue.
pub struct BinaryHeap<T> {
    data: Array<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Array::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Array::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an element onto the heap.
    pub fn push(&mut self, item: T) {
        self.data.append(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the greatest element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.remove(last);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Returns a reference to the greatest element, or `None` if empty.
    pub fn top(&self) -> Option<&T> {
        self.data.get(0)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    pub fn merge(&mut self, other: &mut Self) {
        let mut drained = Array::new();
        drained.concat(&mut other.data);
        for item in drained {
            self.push(item);
        }
    }

    /// Verifies the heap property over every parent/child pair.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] >= self.data[i])
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] <= self.data[parent] {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut largest = idx;
            if left < len && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < len && self.data[right] > self.data[largest] {
                largest = right;
            }
            if largest == idx {
                break;
            }
            self.data.swap(idx, largest);
            idx = largest;
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
