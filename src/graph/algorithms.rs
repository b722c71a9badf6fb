//! Algorithms derived from the traversal engine.
//!
//! Each algorithm here is a thin driver: a small [`Visitor`] supplies the
//! callbacks, the engine does the walking, and the completed context (or the
//! visitor's accumulated state) is interpreted afterwards. Whole-graph
//! algorithms restart the traversal from every vertex not reached by an
//! earlier seed, each restart with a fresh context.

use serde::{Deserialize, Serialize};

use crate::collections::List;
use crate::graph::model::{Edge, Graph, VertexId};
use crate::graph::search::{self, SearchCtx, Visitor};

/// The four-way DFS edge classification, plus a catch-all for edges a
/// context says nothing about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeClass {
    /// The edge discovered its target: `parent(target) == source`.
    Tree,
    /// The target is discovered but not yet finished: the edge closes a
    /// cycle back into the active DFS path.
    Back,
    /// The target finished inside the source's interval (entered after the
    /// source).
    Forward,
    /// The target finished before the source was entered.
    Cross,
    /// The context holds no evidence for any of the above.
    Unknown,
}

/// Classifies `edge` against a completed DFS context.
///
/// The checks run in order: TREE (parent link), BACK (target discovered but
/// unfinished), then FORWARD/CROSS by comparing entry timestamps of finished
/// targets.
pub fn classify_edge(ctx: &SearchCtx, edge: &Edge) -> EdgeClass {
    let (s, t) = (edge.source, edge.target);

    if ctx.parent(t) == Some(s) {
        return EdgeClass::Tree;
    }
    if ctx.discovered(t) && !ctx.processed(t) {
        return EdgeClass::Back;
    }
    if ctx.processed(t) && ctx.entry_time(t) > ctx.entry_time(s) {
        return EdgeClass::Forward;
    }
    if ctx.processed(t) && ctx.entry_time(t) < ctx.entry_time(s) {
        return EdgeClass::Cross;
    }

    EdgeClass::Unknown
}

/// The back-edge predicate used by cycle detection.
///
/// An edge into a discovered-but-unfinished vertex closes a cycle, with one
/// exception on undirected graphs: the synthesized twin of the tree edge
/// that discovered the current vertex points at its own parent and is not a
/// cycle. Directed graphs take no exception: a two-cycle `t -> s -> t`
/// makes `t` the parent of `s` and is still a cycle.
fn is_back_edge<T>(graph: &Graph<T>, ctx: &SearchCtx, edge: &Edge) -> bool {
    ctx.discovered(edge.target)
        && !ctx.processed(edge.target)
        && (graph.is_directed() || ctx.parent(edge.source) != Some(edge.target))
}

/// Reconstructs the vertex sequence `start .. end` from a completed
/// context's parent links, iteratively (no recursion, long paths are fine).
///
/// Meaningless unless `end` was discovered from `start` in `ctx`; check
/// [`SearchCtx::discovered`] first. If the walk hits a vertex with no parent
/// before reaching `start`, the partial sequence is returned as-is.
///
/// # Panics
/// Panics if `start` or `end` is out of range for `ctx`.
pub fn find_path(ctx: &SearchCtx, start: VertexId, end: VertexId) -> List<VertexId> {
    let mut path = List::new();
    path.prepend(end);

    let mut current = end;
    while current != start {
        match ctx.parent(current) {
            Some(parent) => {
                path.prepend(parent);
                current = parent;
            }
            None => break,
        }
    }

    path
}

/// Labels each vertex with its connected component, 1-indexed.
///
/// Repeatedly runs BFS from the first unlabeled vertex; every vertex that
/// BFS discovers gets the seed's label. Intended for undirected graphs (on a
/// directed graph the labels reflect reachability from the seeds, not strong
/// connectivity).
pub fn connected_components<T>(graph: &Graph<T>) -> Vec<usize> {
    let mut labels = vec![0usize; graph.vertex_count()];
    let mut next_label = 0;

    for seed in graph.vertex_ids() {
        if labels[seed] != 0 {
            continue;
        }
        next_label += 1;
        let ctx = search::bfs(graph, seed, &mut ());
        for v in graph.vertex_ids() {
            if ctx.discovered(v) && labels[v] == 0 {
                labels[v] = next_label;
            }
        }
    }

    labels
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Black,
}

fn complement(color: Option<Color>) -> Option<Color> {
    match color {
        Some(Color::White) => Some(Color::Black),
        Some(Color::Black) => Some(Color::White),
        None => None,
    }
}

/// Two-colors the graph through the edge callback; any edge whose endpoints
/// already share a color clears the flag.
struct TwoColoring {
    color: Vec<Option<Color>>,
    bipartite: bool,
}

impl<T> Visitor<T> for TwoColoring {
    fn on_edge(&mut self, _graph: &Graph<T>, edge: &Edge, _ctx: &mut SearchCtx) {
        if self.color[edge.source] == self.color[edge.target] {
            self.bipartite = false;
        }
        self.color[edge.target] = complement(self.color[edge.source]);
    }
}

/// Returns `true` if the graph is two-colorable.
///
/// BFS two-coloring, restarted from every still-uncolored vertex so that
/// disconnected graphs are fully covered; the result is the conjunction over
/// all components.
pub fn is_bipartite<T>(graph: &Graph<T>) -> bool {
    let mut coloring = TwoColoring {
        color: vec![None; graph.vertex_count()],
        bipartite: true,
    };

    for seed in graph.vertex_ids() {
        if coloring.color[seed].is_some() {
            continue;
        }
        coloring.color[seed] = Some(Color::White);
        search::bfs(graph, seed, &mut coloring);
    }

    coloring.bipartite
}

/// Collects back edges, deduplicating endpoint pairs: a restart's DFS may
/// re-walk a region an earlier seed already covered, re-finding its cycles.
struct BackEdgeCollector {
    found: List<Edge>,
    reported: Vec<(VertexId, VertexId)>,
}

impl<T> Visitor<T> for BackEdgeCollector {
    fn on_edge(&mut self, graph: &Graph<T>, edge: &Edge, ctx: &mut SearchCtx) {
        if is_back_edge(graph, ctx, edge) && !self.reported.contains(&(edge.source, edge.target)) {
            self.reported.push((edge.source, edge.target));
            self.found.append(*edge);
        }
    }
}

/// Finds every back edge in the graph by DFS over all components.
///
/// A non-empty result signals a cycle. On undirected graphs the synthesized
/// twin of a tree edge is not counted (see the back-edge predicate); a
/// self-loop is.
pub fn find_back_edges<T>(graph: &Graph<T>) -> List<Edge> {
    let mut collector = BackEdgeCollector {
        found: List::new(),
        reported: Vec::new(),
    };

    let mut seen = vec![false; graph.vertex_count()];
    for seed in graph.vertex_ids() {
        if seen[seed] {
            continue;
        }
        let ctx = search::dfs(graph, seed, &mut collector);
        for v in graph.vertex_ids() {
            if ctx.discovered(v) {
                seen[v] = true;
            }
        }
    }

    collector.found
}

/// Prepends each vertex to the order as it finishes; placed vertices are
/// skipped when a later restart re-walks them.
struct TopoOrder {
    order: List<VertexId>,
    placed: Vec<bool>,
}

impl<T> Visitor<T> for TopoOrder {
    fn on_edge(&mut self, graph: &Graph<T>, edge: &Edge, ctx: &mut SearchCtx) {
        if is_back_edge(graph, ctx, edge) {
            tracing::warn!(
                source = edge.source,
                target = edge.target,
                "found directed cycle; graph is not a DAG"
            );
        }
    }

    fn on_vertex_late(&mut self, _graph: &Graph<T>, vertex: VertexId, _ctx: &mut SearchCtx) {
        if !self.placed[vertex] {
            self.placed[vertex] = true;
            self.order.prepend(vertex);
        }
    }
}

/// Topologically sorts a directed graph: DFS over all components, each
/// vertex prepended to the result as it finishes (reverse finish order).
///
/// If the graph has a cycle a warning is logged for each back edge and the
/// returned ordering is meaningless; this is deliberate best-effort behavior,
/// not an error path. Callers that need a real DAG check run
/// [`find_back_edges`] first.
///
/// # Panics
/// Panics if the graph is undirected.
pub fn topological_sort<T>(graph: &Graph<T>) -> List<VertexId> {
    assert!(
        graph.is_directed(),
        "cannot topologically sort an undirected graph"
    );

    let mut visitor = TopoOrder {
        order: List::new(),
        placed: vec![false; graph.vertex_count()],
    };

    let mut seen = vec![false; graph.vertex_count()];
    for seed in graph.vertex_ids() {
        if seen[seed] {
            continue;
        }
        let ctx = search::dfs(graph, seed, &mut visitor);
        for v in graph.vertex_ids() {
            if ctx.discovered(v) {
                seen[v] = true;
            }
        }
    }

    visitor.order
}
