//! `Array` — a growable ordered sequence with index access.
//!
//! This is the workhorse sequence of the crate: the graph module uses it for
//! the vertex arena and for per-vertex adjacency lists, and [`BinaryHeap`]
//! uses it as backing storage.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `append` | O(1) amortized | Doubles capacity on growth |
//! | `prepend` / `insert` | O(n) | Shifts trailing elements |
//! | `get` / `set` | O(1) | Direct index access |
//! | `remove` | O(n) | Shifts trailing elements |
//! | `concat` | O(m) | Appends all of `other` |
//!
//! [`BinaryHeap`]: crate::collections::BinaryHeap

use core::fmt;
use core::ops::{Index, IndexMut};

/// A growable ordered sequence.
///
/// Elements keep their insertion order; positions are stable until an
/// `insert`/`remove` shifts them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Array<T> {
    items: Vec<T>,
}

impl<T> Array<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element to the back.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Prepends an element to the front, shifting everything else right.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Inserts an element at `index`, shifting trailing elements right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        assert!(index <= self.items.len(), "index {index} out of bounds");
        self.items.insert(index, item);
    }

    /// Removes and returns the element at `index`, shifting trailing
    /// elements left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.items.len(), "index {index} out of bounds");
        self.items.remove(index)
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, item: T) -> T {
        assert!(index < self.items.len(), "index {index} out of bounds");
        core::mem::replace(&mut self.items[index], item)
    }

    /// Moves every element of `other` onto the back of `self`, leaving
    /// `other` empty.
    pub fn concat(&mut self, other: &mut Self) {
        self.items.append(&mut other.items);
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Returns a slice over all elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
