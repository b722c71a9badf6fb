//! General-purpose containers.
//!
//! Collections are organized by shape:
//! - [`Array`]: growable ordered sequence with index access
//! - [`List`]: arena-backed doubly linked list
//! - [`Deque`]: growable ring buffer
//! - [`Queue`] / [`Stack`]: FIFO and LIFO adapters over [`List`]
//! - [`BinaryHeap`]: max-heap over [`Array`]

pub mod array;
pub mod binary_heap;
pub mod deque;
pub mod list;
pub mod queue;
pub mod stack;

pub use array::Array;
pub use binary_heap::BinaryHeap;
pub use deque::Deque;
pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
