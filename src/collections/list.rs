//! `List` — an arena-backed doubly linked list.
//!
//! Nodes live in one growable slot arena and link to each other by index, so
//! the list needs no raw pointers and removed slots are recycled through a
//! free list. This is the crate's result-list shape: O(1) `append` *and*
//! `prepend` make it the natural carrier for reconstructed paths,
//! topological orderings, and back-edge reports.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `append` / `prepend` | O(1) | May grow the slot arena |
//! | `pop_front` / `pop_back` | O(1) | Slot goes on the free list |
//! | `front` / `back` | O(1) | |
//! | `iter` | O(n) | Follows index links |

use core::fmt;

/// One slot in the node arena.
enum Slot<T> {
    Occupied {
        value: T,
        prev: Option<usize>,
        next: Option<usize>,
    },
    /// Free slot; holds the next entry of the free list.
    Free(Option<usize>),
}

/// A doubly linked list over an index-linked slot arena.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Takes a slot off the free list, or grows the arena.
    fn alloc(&mut self, slot: Slot<T>) -> usize {
        if let Some(idx) = self.free_head {
            match self.slots[idx] {
                Slot::Free(next_free) => {
                    self.free_head = next_free;
                    self.slots[idx] = slot;
                    idx
                }
                Slot::Occupied { .. } => unreachable!("free list points at occupied slot"),
            }
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    /// Returns the slot to the free list and takes its value out.
    fn release(&mut self, idx: usize) -> T {
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        match slot {
            Slot::Occupied { value, .. } => value,
            Slot::Free(_) => unreachable!("released a free slot"),
        }
    }

    /// Appends an element to the back.
    pub fn append(&mut self, value: T) {
        let idx = self.alloc(Slot::Occupied {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Slot::Occupied { next, .. } = &mut self.slots[tail] {
                    *next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Prepends an element to the front.
    pub fn prepend(&mut self, value: T) {
        let idx = self.alloc(Slot::Occupied {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => {
                if let Slot::Occupied { prev, .. } = &mut self.slots[head] {
                    *prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = match &self.slots[head] {
            Slot::Occupied { next, .. } => *next,
            Slot::Free(_) => unreachable!("head points at free slot"),
        };
        self.head = next;
        match next {
            Some(idx) => {
                if let Slot::Occupied { prev, .. } = &mut self.slots[idx] {
                    *prev = None;
                }
            }
            None => self.tail = None,
        }
        self.len -= 1;
        Some(self.release(head))
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let prev = match &self.slots[tail] {
            Slot::Occupied { prev, .. } => *prev,
            Slot::Free(_) => unreachable!("tail points at free slot"),
        };
        self.tail = prev;
        match prev {
            Some(idx) => {
                if let Slot::Occupied { next, .. } = &mut self.slots[idx] {
                    *next = None;
                }
            }
            None => self.head = None,
        }
        self.len -= 1;
        Some(self.release(tail))
    }

    /// Returns a reference to the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.value_at(self.head)
    }

    /// Returns a reference to the back element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.value_at(self.tail)
    }

    fn value_at(&self, idx: Option<usize>) -> Option<&T> {
        match &self.slots[idx?] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Iterates back to front.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            list: self,
            current: self.tail,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.list.slots[idx] {
            Slot::Occupied { value, next, .. } => {
                self.current = *next;
                Some(value)
            }
            Slot::Free(_) => None,
        }
    }
}

/// Back-to-front iterator over a [`List`].
pub struct IterRev<'a, T> {
    list: &'a List<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.list.slots[idx] {
            Slot::Occupied { value, prev, .. } => {
                self.current = *prev;
                Some(value)
            }
            Slot::Free(_) => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_prepend() {
        let mut list = List::new();
        list.append(2);
        list.append(3);
        list.prepend(1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn pop_both_ends() {
        let mut list: List<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(4));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn drain_to_empty_and_reuse() {
        let mut list = List::new();
        list.append(1);
        list.append(2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        // Freed slots are recycled, not leaked.
        list.append(3);
        list.prepend(4);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3]);
    }

    #[test]
    fn single_element_symmetry() {
        let mut list = List::new();
        list.append(7);
        assert_eq!(list.front(), list.back());
        assert_eq!(list.pop_back(), Some(7));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }
}
