//! Predecessor forests over a graph.
//!
//! A [`Forest`] stores, for every vertex, its parent vertex and the edge that
//! connects them, as flat index arrays (no per-node allocation). A vertex
//! whose parent is itself is the root of its tree. [`ShortestPathForest`]
//! layers per-vertex label and distance state on top.

pub mod shortest_path;

pub use shortest_path::{Label, ShortestPathForest};

use crate::graph::Graph;

/// Fill value stored as the parent edge of root vertices.
pub const NO_EDGE: usize = usize::MAX;

/// A forest of rooted trees over the vertices of a graph.
///
/// Holds a shared reference to its graph; the graph must outlive the forest.
/// Initially (and after [`reset`](Forest::reset)) every vertex is the root of
/// its own singleton tree.
///
/// The forest itself does not check for cycles: callers that set predecessors
/// must keep every predecessor chain terminating at a root.
#[derive(Debug, Clone)]
pub struct Forest<'g, G: Graph> {
    graph: &'g G,
    pred_vertex: Vec<usize>,
    pred_edge: Vec<usize>,
    fill_edge: usize,
}

impl<'g, G: Graph> Forest<'g, G> {
    /// Creates a forest in which every vertex is its own root, with
    /// [`NO_EDGE`] as the parent-edge fill value.
    pub fn new(graph: &'g G) -> Self {
        Self::with_edge_fill(graph, NO_EDGE)
    }

    /// Creates a forest in which every vertex is its own root, storing
    /// `fill_edge` as the parent edge of every root.
    pub fn with_edge_fill(graph: &'g G, fill_edge: usize) -> Self {
        let num_vertices = graph.num_vertices();
        Forest {
            graph,
            pred_vertex: (0..num_vertices).collect(),
            pred_edge: vec![fill_edge; num_vertices],
            fill_edge,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns the parent vertex of `vertex`, or `vertex` itself if it is a
    /// root.
    pub fn predecessor_vertex(&self, vertex: usize) -> usize {
        assert!(self.graph.contains_vertex(vertex), "vertex {vertex} out of range");
        self.pred_vertex[self.graph.get_vertex_id(vertex)]
    }

    /// Returns the edge connecting `vertex` to its parent.
    ///
    /// Only meaningful if `vertex` is not a root; for roots this returns the
    /// fill value.
    pub fn predecessor_edge(&self, vertex: usize) -> usize {
        assert!(self.graph.contains_vertex(vertex), "vertex {vertex} out of range");
        self.pred_edge[self.graph.get_vertex_id(vertex)]
    }

    /// Returns the `(parent vertex, parent edge)` pair of `vertex`.
    pub fn predecessor(&self, vertex: usize) -> (usize, usize) {
        (self.predecessor_vertex(vertex), self.predecessor_edge(vertex))
    }

    /// Sets the predecessor of `vertex` to `parent_vertex`, connected by
    /// `parent_edge`.
    ///
    /// `parent_edge` must be an edge whose tail is `parent_vertex` and whose
    /// head is `vertex`; the resulting predecessor chain must stay acyclic.
    pub fn set_predecessor(&mut self, vertex: usize, parent_vertex: usize, parent_edge: usize) {
        assert!(self.graph.contains_vertex(vertex), "vertex {vertex} out of range");
        assert!(
            self.graph.contains_vertex(parent_vertex),
            "vertex {parent_vertex} out of range"
        );
        assert!(
            self.graph.contains_edge(parent_edge),
            "edge {parent_edge} out of range"
        );
        let vertex_id = self.graph.get_vertex_id(vertex);
        self.pred_vertex[vertex_id] = parent_vertex;
        self.pred_edge[vertex_id] = self.graph.get_edge_id(parent_edge);
    }

    /// Makes `vertex` the root of its own tree.
    pub fn make_root_vertex(&mut self, vertex: usize) {
        assert!(self.graph.contains_vertex(vertex), "vertex {vertex} out of range");
        let vertex_id = self.graph.get_vertex_id(vertex);
        self.pred_vertex[vertex_id] = vertex;
        self.pred_edge[vertex_id] = self.fill_edge;
    }

    /// Returns true if `vertex` is the root of its tree.
    pub fn is_root_vertex(&self, vertex: usize) -> bool {
        self.predecessor_vertex(vertex) == vertex
    }

    /// Returns an iterator over the `(tail, edge)` pairs on the walk from
    /// `vertex` up to (but excluding) its root.
    ///
    /// Each step yields the current vertex's predecessor pair and then moves
    /// to the predecessor vertex. Empty if `vertex` is a root.
    pub fn predecessors(&self, vertex: usize) -> Predecessors<'_, 'g, G> {
        assert!(self.graph.contains_vertex(vertex), "vertex {vertex} out of range");
        Predecessors {
            forest: self,
            current: vertex,
        }
    }

    /// Restores every vertex to be the root of its own singleton tree.
    pub fn reset(&mut self) {
        for (vertex_id, pred) in self.pred_vertex.iter_mut().enumerate() {
            *pred = vertex_id;
        }
        self.pred_edge.fill(self.fill_edge);
    }
}

/// Lazy walk from a vertex to the root of its tree. See
/// [`Forest::predecessors`].
#[derive(Debug, Clone)]
pub struct Predecessors<'f, 'g, G: Graph> {
    forest: &'f Forest<'g, G>,
    current: usize,
}

impl<G: Graph> Iterator for Predecessors<'_, '_, G> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.forest.is_root_vertex(self.current) {
            return None;
        }
        let pred = self.forest.predecessor(self.current);
        self.current = pred.0;
        Some(pred)
    }
}
