//! Graph model, traversal engine, and derived algorithms.
//!
//! The module is layered:
//! - [`model`]: directed/undirected graphs over an append-only vertex arena
//! - [`search`]: visitor-driven BFS/DFS producing a per-call [`search::SearchCtx`]
//! - [`algorithms`]: paths, components, bipartiteness, edge classification,
//!   back-edge detection, and topological sort, all built on the one
//!   traversal primitive

pub mod algorithms;
pub mod model;
pub mod search;

pub use algorithms::EdgeClass;
pub use model::{Edge, Graph, GraphKind, VertexId};
