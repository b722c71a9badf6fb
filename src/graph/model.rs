//! The vertex/edge data model.
//!
//! A [`Graph`] owns its vertices in one append-only arena; a vertex's
//! identity ([`VertexId`]) is its position in that arena at insertion time
//! and never changes. All cross-references (adjacency lists, search parents)
//! are identities, never pointers, so they stay valid for the life of the
//! graph.
//!
//! Undirected edges are stored as two directed half-edges: adding `(u, v)`
//! appends the edge to `u`'s adjacency list and a synthesized twin `(v, u)`
//! to `v`'s, so traversal can walk the edge from either side. A self-loop
//! `(u, u)` gets no twin; its out-degree is bumped twice instead, keeping the
//! degree-sum invariant (every undirected edge contributes 2).
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | O(1) amortized | Appends to the arena |
//! | `add_edge` | O(1) amortized | Appends to adjacency list(s) |
//! | `edges` / degrees | O(1) | Counters kept on insert |
//! | `in_edges` / `out_edges` | O(deg) | Filter + collect |
//! | `find_vertex` | O(n) | Linear payload scan |

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::collections::Array;

/// A vertex's stable identity: its position in the graph's vertex arena.
pub type VertexId = usize;

/// Whether edges are one-way or two-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    /// Each edge goes from source to target only.
    Directed,
    /// Each edge can be walked from either endpoint.
    Undirected,
}

/// A weighted edge between two vertex identities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identity of the vertex the edge leaves.
    pub source: VertexId,
    /// Identity of the vertex the edge enters.
    pub target: VertexId,
    /// Edge weight. Carried by the model; no algorithm in this crate
    /// interprets it.
    pub weight: f64,
}

impl Edge {
    /// Creates an edge from `source` to `target` with the given weight.
    pub fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A vertex record: payload, degree counters, and outgoing adjacency.
struct Vertex<T> {
    payload: T,
    in_degree: usize,
    out_degree: usize,
    /// Outgoing edges, including synthesized twins on undirected graphs.
    edges: Array<Edge>,
}

/// A directed or undirected graph over an append-only vertex arena.
///
/// Vertices and edges can be added but never removed. The payload type `T`
/// is owned by the graph and handed back by reference.
pub struct Graph<T> {
    kind: GraphKind,
    vertices: Array<Vertex<T>>,
    edge_count: usize,
}

impl<T> Graph<T> {
    /// Creates an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Array::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Returns the graph's kind.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` for directed graphs.
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Returns `true` for undirected graphs.
    pub fn is_undirected(&self) -> bool {
        self.kind == GraphKind::Undirected
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges added via [`Graph::add_edge`].
    ///
    /// Synthesized undirected twins are not counted.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its identity.
    ///
    /// The identity is the vertex's position in the arena and is one greater
    /// than the previous vertex's.
    pub fn add_vertex(&mut self, payload: T) -> VertexId {
        let id = self.vertices.len();
        self.vertices.append(Vertex {
            payload,
            in_degree: 0,
            out_degree: 0,
            edges: Array::new(),
        });
        id
    }

    /// Adds an edge from `source` to `target` with the given weight.
    ///
    /// On a directed graph the edge appears once, in `source`'s adjacency
    /// list, and bumps `target`'s in-degree. On an undirected graph both
    /// endpoints' out-degrees are bumped and a twin edge `(target, source)`
    /// is appended to `target`'s adjacency list, except for a self-loop,
    /// which bumps the single vertex's out-degree twice and gets no twin.
    ///
    /// # Panics
    /// Panics if `source` or `target` is not a vertex of this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f64) {
        assert!(source < self.vertices.len(), "source vertex {source} out of bounds");
        assert!(target < self.vertices.len(), "target vertex {target} out of bounds");

        self.vertices[source].out_degree += 1;
        self.vertices[source].edges.append(Edge::new(source, target, weight));
        self.edge_count += 1;

        match self.kind {
            GraphKind::Directed => {
                self.vertices[target].in_degree += 1;
            }
            GraphKind::Undirected => {
                self.vertices[target].out_degree += 1;
                if source != target {
                    self.vertices[target].edges.append(Edge::new(target, source, weight));
                }
                // A self-loop touches its vertex twice; the second touch is
                // the extra out-degree bump above, with no twin edge stored.
            }
        }
    }

    fn vertex(&self, id: VertexId) -> &Vertex<T> {
        assert!(id < self.vertices.len(), "vertex {id} out of bounds");
        &self.vertices[id]
    }

    /// Returns a reference to the payload of `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn payload(&self, id: VertexId) -> &T {
        &self.vertex(id).payload
    }

    /// Returns a mutable reference to the payload of `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn payload_mut(&mut self, id: VertexId) -> &mut T {
        assert!(id < self.vertices.len(), "vertex {id} out of bounds");
        &mut self.vertices[id].payload
    }

    /// Replaces the payload of `id`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn set_payload(&mut self, id: VertexId, payload: T) -> T {
        assert!(id < self.vertices.len(), "vertex {id} out of bounds");
        core::mem::replace(&mut self.vertices[id].payload, payload)
    }

    /// Returns `id`'s full adjacency list, including synthesized twins on
    /// undirected graphs.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        self.vertex(id).edges.as_slice()
    }

    /// Returns the edges in `id`'s adjacency list whose source is `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn out_edges(&self, id: VertexId) -> Array<Edge> {
        self.vertex(id)
            .edges
            .iter()
            .filter(|e| e.source == id)
            .copied()
            .collect()
    }

    /// Returns the edges in `id`'s adjacency list whose target is `id`
    /// (self-loops, on this storage scheme).
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn in_edges(&self, id: VertexId) -> Array<Edge> {
        self.vertex(id)
            .edges
            .iter()
            .filter(|e| e.target == id)
            .copied()
            .collect()
    }

    /// Returns every stored edge, concatenated over all adjacency lists.
    ///
    /// On undirected graphs this includes the synthesized twins.
    pub fn all_edges(&self) -> Array<Edge> {
        self.vertices
            .iter()
            .flat_map(|v| v.edges.iter().copied())
            .collect()
    }

    /// Returns the number of edges entering `id`.
    ///
    /// On undirected graphs in-degree and out-degree coincide; the shared
    /// counter is reported.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn in_degree(&self, id: VertexId) -> usize {
        let v = self.vertex(id);
        match self.kind {
            GraphKind::Directed => v.in_degree,
            GraphKind::Undirected => v.out_degree,
        }
    }

    /// Returns the number of edges leaving `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.vertex(id).out_degree
    }

    /// Returns the sum of both degree counters for `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    pub fn degree(&self, id: VertexId) -> usize {
        let v = self.vertex(id);
        v.in_degree + v.out_degree
    }

    /// Returns the identities of every vertex, in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        0..self.vertices.len()
    }
}

impl<T: PartialEq> Graph<T> {
    /// Returns the first vertex whose payload equals `payload`, by linear
    /// scan in identity order.
    pub fn find_vertex(&self, payload: &T) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.payload == *payload)
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind)
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}
