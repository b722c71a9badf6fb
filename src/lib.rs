//! # `cairn` - Containers and Graph Traversal Toolkit
//!
//! A general-purpose container library (growable arrays, doubly linked lists,
//! deques, FIFO queues, LIFO stacks, binary heaps) plus a graph module built
//! around one reusable primitive: a visitor-driven breadth-first/depth-first
//! traversal engine.
//!
//! ## Architecture
//!
//! The crate is stratified, leaves first:
//!
//! 1. **Collections** (`collections`): ordered sequences, lists, and the
//!    FIFO/LIFO adapters the traversal engine uses as frontiers.
//! 2. **Graph model** (`graph::model`): an arena of vertices addressed by
//!    stable integer identities. All cross-references (adjacency, parents)
//!    are indices into that arena, never pointers.
//! 3. **Traversal engine** (`graph::search`): BFS and DFS parameterized by a
//!    [`Visitor`](graph::search::Visitor) with three hooks and a cooperative
//!    early-stop flag, producing a per-call [`SearchCtx`](graph::search::SearchCtx).
//! 4. **Derived algorithms** (`graph::algorithms`): path reconstruction,
//!    connected components, bipartiteness, edge classification, back-edge
//!    detection, and topological sort, each a thin visitor over the engine.
//!
//! ## Ownership model
//!
//! Everything is single-threaded and synchronous. Graphs own their vertex
//! payloads; a `SearchCtx` is exclusively owned by whichever caller ran the
//! search that produced it, and is independent of any other search.
//!
//! ## Example
//!
//! ```rust
//! use cairn::graph::{Graph, search};
//!
//! let mut g = Graph::directed();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! let c = g.add_vertex("c");
//! g.add_edge(a, b, 1.0);
//! g.add_edge(b, c, 1.0);
//!
//! let ctx = search::bfs(&g, a, &mut ());
//! assert!(ctx.discovered(c));
//! assert_eq!(ctx.parent(c), Some(b));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{Array, BinaryHeap, Deque, List, Queue, Stack};
pub use graph::{Edge, EdgeClass, Graph, GraphKind, VertexId};
pub use graph::search::{SearchCtx, Visitor};
