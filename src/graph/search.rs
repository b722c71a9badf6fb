//! The visitor-driven traversal engine.
//!
//! [`bfs`] and [`dfs`] run one traversal from a start vertex and return a
//! completed [`SearchCtx`]. Callers steer them by implementing [`Visitor`]:
//! three hooks (vertex discovered, edge seen, vertex finished), each of
//! which may call [`SearchCtx::request_stop`] to abandon the traversal at
//! the next check point. Every derived algorithm in
//! [`algorithms`](crate::graph::algorithms) is a visitor over this engine.
//!
//! Per traversal, each vertex moves through three states in strict order:
//! *undiscovered* → *discovered* (first enqueued/pushed) → *processed*
//! (callbacks and adjacency scan complete). Entry and exit timestamps are
//! drawn from one shared counter, stamped once each, so
//! `entry_time(v) < exit_time(v)` always, and DFS entry/exit intervals nest
//! or are disjoint.
//!
//! A traversal visits only the component reachable from `start`. Whole-graph
//! algorithms restart from every undiscovered vertex with a fresh context;
//! contexts are never reused across searches.

use crate::collections::{Queue, Stack};
use crate::graph::model::{Edge, Graph, VertexId};

/// Per-traversal scratch state: discovery and processing flags, entry/exit
/// timestamps, parent links, and the cooperative stop flag.
///
/// A context is created fresh by every [`bfs`]/[`dfs`] call, returned by
/// value, and exclusively owned by the caller. It is independent of any
/// other in-flight or prior search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCtx {
    discovered: Vec<bool>,
    processed: Vec<bool>,
    entry_time: Vec<u64>,
    exit_time: Vec<u64>,
    parent: Vec<Option<VertexId>>,
    stop: bool,
    clock: u64,
}

impl SearchCtx {
    fn new(vertex_count: usize) -> Self {
        Self {
            discovered: vec![false; vertex_count],
            processed: vec![false; vertex_count],
            entry_time: vec![0; vertex_count],
            exit_time: vec![0; vertex_count],
            parent: vec![None; vertex_count],
            stop: false,
            clock: 1,
        }
    }

    fn check(&self, vertex: VertexId) {
        assert!(
            vertex < self.discovered.len(),
            "vertex {vertex} out of bounds for this search context"
        );
    }

    /// Returns the number of vertices the context covers.
    pub fn vertex_count(&self) -> usize {
        self.discovered.len()
    }

    /// Returns `true` if `vertex` was discovered during the traversal.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range for the searched graph.
    pub fn discovered(&self, vertex: VertexId) -> bool {
        self.check(vertex);
        self.discovered[vertex]
    }

    /// Returns `true` if `vertex` was fully processed during the traversal.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range for the searched graph.
    pub fn processed(&self, vertex: VertexId) -> bool {
        self.check(vertex);
        self.processed[vertex]
    }

    /// Returns the timestamp at which `vertex` began processing, or 0 if it
    /// was never reached.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range for the searched graph.
    pub fn entry_time(&self, vertex: VertexId) -> u64 {
        self.check(vertex);
        self.entry_time[vertex]
    }

    /// Returns the timestamp at which `vertex` finished processing, or 0 if
    /// it never finished.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range for the searched graph.
    pub fn exit_time(&self, vertex: VertexId) -> u64 {
        self.check(vertex);
        self.exit_time[vertex]
    }

    /// Returns the vertex from which `vertex` was discovered, or `None` for
    /// the start vertex and unreached vertices.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range for the searched graph.
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.check(vertex);
        self.parent[vertex]
    }

    /// Asks the engine to abandon the traversal.
    ///
    /// The flag is honored immediately after the current callback returns;
    /// the context is handed back as-is, with unreached vertices left in
    /// whatever state they were in.
    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    /// Returns `true` once a callback has requested early termination.
    pub fn stop_requested(&self) -> bool {
        self.stop
    }

    fn stamp_entry(&mut self, vertex: VertexId) {
        self.entry_time[vertex] = self.clock;
        self.clock += 1;
    }

    fn stamp_exit(&mut self, vertex: VertexId) {
        self.exit_time[vertex] = self.clock;
        self.clock += 1;
    }
}

/// Traversal callbacks.
///
/// All three hooks default to no-ops; implement the ones the algorithm
/// needs. Each hook receives the graph and the context (mutably, so it can
/// [`request_stop`](SearchCtx::request_stop)); `on_edge` also receives the
/// edge as stored in the current vertex's adjacency list.
pub trait Visitor<T> {
    /// Called when a vertex begins processing, before its adjacency scan.
    fn on_vertex_early(&mut self, _graph: &Graph<T>, _vertex: VertexId, _ctx: &mut SearchCtx) {}

    /// Called for each reported edge of the current vertex.
    ///
    /// On undirected graphs the synthesized twin of the edge used to reach
    /// the current vertex is not reported a second time; on directed graphs
    /// every edge is reported.
    fn on_edge(&mut self, _graph: &Graph<T>, _edge: &Edge, _ctx: &mut SearchCtx) {}

    /// Called when a vertex finishes processing, after its adjacency scan.
    fn on_vertex_late(&mut self, _graph: &Graph<T>, _vertex: VertexId, _ctx: &mut SearchCtx) {}
}

/// The no-op visitor, for traversals run only for their context.
impl<T> Visitor<T> for () {}

/// Skip reporting the synthesized twin of the edge that discovered the
/// current vertex: its target is the current vertex's parent and has already
/// finished. Directed graphs report every edge.
fn report_edge<T>(graph: &Graph<T>, ctx: &SearchCtx, current: VertexId, target: VertexId) -> bool {
    graph.is_directed() || !(ctx.processed[target] && ctx.parent[current] == Some(target))
}

/// Runs a breadth-first search from `start`, returning the completed
/// context.
///
/// The frontier is a FIFO queue seeded with `start`. Per dequeued vertex:
/// entry timestamp, `on_vertex_early`, mark processed, adjacency scan
/// (report edge, then discover/enqueue undiscovered targets),
/// `on_vertex_late`, exit timestamp.
///
/// # Panics
/// Panics if `start` is not a vertex of `graph`.
pub fn bfs<T, V: Visitor<T>>(graph: &Graph<T>, start: VertexId, visitor: &mut V) -> SearchCtx {
    assert!(start < graph.vertex_count(), "start vertex {start} out of bounds");

    tracing::trace!(start, kind = ?graph.kind(), "breadth-first search");

    let mut ctx = SearchCtx::new(graph.vertex_count());
    let mut frontier = Queue::new();

    ctx.discovered[start] = true;
    frontier.enqueue(start);

    while let Some(v) = frontier.dequeue() {
        ctx.stamp_entry(v);
        visitor.on_vertex_early(graph, v, &mut ctx);
        if ctx.stop {
            return ctx;
        }
        ctx.processed[v] = true;

        for edge in graph.edges(v) {
            let succ = edge.target;

            if report_edge(graph, &ctx, v, succ) {
                visitor.on_edge(graph, edge, &mut ctx);
                if ctx.stop {
                    return ctx;
                }
            }

            if !ctx.discovered[succ] {
                ctx.discovered[succ] = true;
                ctx.parent[succ] = Some(v);
                frontier.enqueue(succ);
            }
        }

        visitor.on_vertex_late(graph, v, &mut ctx);
        if ctx.stop {
            return ctx;
        }
        ctx.stamp_exit(v);
    }

    ctx
}

/// Runs a depth-first search from `start`, returning the completed context.
///
/// The frontier is a LIFO stack. A vertex's early callback and adjacency
/// scan run when it first reaches the top of the stack; during the scan each
/// undiscovered target has its parent recorded and is pushed *before* the
/// edge callback runs, so a tree edge already reads as a tree edge from
/// inside `on_edge`. The late callback and exit timestamp happen when the
/// vertex surfaces again with no unvisited descendants. A stale stack entry
/// whose vertex has already finished is popped without re-invoking any
/// callback.
///
/// # Panics
/// Panics if `start` is not a vertex of `graph`.
pub fn dfs<T, V: Visitor<T>>(graph: &Graph<T>, start: VertexId, visitor: &mut V) -> SearchCtx {
    assert!(start < graph.vertex_count(), "start vertex {start} out of bounds");

    tracing::trace!(start, kind = ?graph.kind(), "depth-first search");

    let mut ctx = SearchCtx::new(graph.vertex_count());
    let mut frontier = Stack::new();

    frontier.push(start);

    while let Some(&v) = frontier.top() {
        if !ctx.discovered[v] {
            ctx.discovered[v] = true;
            ctx.stamp_entry(v);
            visitor.on_vertex_early(graph, v, &mut ctx);
            if ctx.stop {
                return ctx;
            }

            for edge in graph.edges(v) {
                let succ = edge.target;

                if !ctx.discovered[succ] {
                    ctx.parent[succ] = Some(v);
                    frontier.push(succ);
                }

                if report_edge(graph, &ctx, v, succ) {
                    visitor.on_edge(graph, edge, &mut ctx);
                    if ctx.stop {
                        return ctx;
                    }
                }
            }
        }

        // v is still on top when it has no unvisited descendants left.
        if frontier.top() == Some(&v) {
            frontier.pop();
            if ctx.processed[v] {
                // Stale duplicate of an already-finished vertex.
                continue;
            }
            visitor.on_vertex_late(graph, v, &mut ctx);
            if ctx.stop {
                return ctx;
            }
            ctx.processed[v] = true;
            ctx.stamp_exit(v);
        }
    }

    ctx
}
