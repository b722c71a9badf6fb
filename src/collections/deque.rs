//! `Deque` — a growable ring buffer.
//!
//! Elements occupy a contiguous buffer addressed modulo its capacity, so both
//! ends support O(1) push and pop. When the buffer fills it is reallocated at
//! double capacity and the live elements are re-laid-out from index 0.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push_front` / `push_back` | O(1) amortized | Doubles on growth |
//! | `pop_front` / `pop_back` | O(1) | |
//! | `front` / `back` | O(1) | |

use core::fmt;

const INITIAL_CAPACITY: usize = 8;

/// A double-ended queue over a ring buffer.
pub struct Deque<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty deque with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self { buf, head: 0, len: 0 }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn wrap(&self, logical: usize) -> usize {
        (self.head + logical) % self.buf.len()
    }

    /// Re-lays the ring out from index 0 in a buffer of twice the capacity.
    fn grow(&mut self) {
        let mut next = Vec::with_capacity(self.buf.len() * 2);
        next.resize_with(self.buf.len() * 2, || None);
        for i in 0..self.len {
            let idx = self.wrap(i);
            next[i] = self.buf[idx].take();
        }
        self.buf = next;
        self.head = 0;
    }

    /// Pushes an element onto the back.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        let idx = self.wrap(self.len);
        self.buf[idx] = Some(value);
        self.len += 1;
    }

    /// Pushes an element onto the front.
    pub fn push_front(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.head = (self.head + self.buf.len() - 1) % self.buf.len();
        self.buf[self.head] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = self.wrap(1);
        self.len -= 1;
        value
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let idx = self.wrap(self.len - 1);
        self.len -= 1;
        self.buf[idx].take()
    }

    /// Returns a reference to the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Returns a reference to the back element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.wrap(self.len - 1)].as_ref()
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(move |i| self.buf[self.wrap(i)].as_ref())
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_through_back_front() {
        let mut d = Deque::new();
        for i in 0..5 {
            d.push_back(i);
        }
        for i in 0..5 {
            assert_eq!(d.pop_front(), Some(i));
        }
        assert!(d.is_empty());
    }

    #[test]
    fn both_ends() {
        let mut d = Deque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        assert_eq!(d.front(), Some(&1));
        assert_eq!(d.back(), Some(&3));
        assert_eq!(d.pop_back(), Some(3));
        assert_eq!(d.pop_front(), Some(1));
        assert_eq!(d.pop_front(), Some(2));
        assert_eq!(d.pop_front(), None);
    }

    #[test]
    fn grows_past_initial_capacity_with_wrapped_head() {
        let mut d = Deque::with_capacity(4);
        // Rotate the head away from 0 before filling.
        d.push_back(0);
        d.pop_front();
        for i in 0..40 {
            d.push_back(i);
        }
        assert_eq!(d.len(), 40);
        let collected: Vec<i32> = std::iter::from_fn(|| d.pop_front()).collect();
        assert_eq!(collected, (0..40).collect::<Vec<_>>());
    }
}
