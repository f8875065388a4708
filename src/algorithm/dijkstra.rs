use crate::data_structures::MinHeap;
use crate::forest::{Predecessors, ShortestPathForest};
use crate::graph::Graph;
use crate::measure::DistanceMeasure;

/// Dijkstra's shortest-path search: best-first over a priority queue keyed by
/// distance.
///
/// The search is driven by the caller:
///
/// ```
/// use sparseflow::{CsrGraph, Dijkstra, Graph};
///
/// let graph = CsrGraph::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
/// let weights = [1u64, 4, 2, 1];
/// let mut dijkstra: Dijkstra<CsrGraph, u64> = Dijkstra::new(&graph);
/// dijkstra.add_source(0);
/// while !dijkstra.done() {
///     let (tail, distance) = dijkstra.pop_next_unvisited_vertex();
///     dijkstra.visit_vertex(tail, distance);
///     for (edge, head) in graph.outgoing_edges(tail) {
///         dijkstra.relax_edge(edge, tail, head, distance + weights[edge]);
///     }
/// }
/// assert_eq!(dijkstra.distance_to_vertex(3), 4);
/// ```
///
/// or in one call via [`run`](Dijkstra::run). Vertices are visited in
/// nondecreasing distance order; ties are broken deterministically by vertex
/// id.
///
/// There is no decrease-key: every relaxation pushes a fresh
/// `(distance, vertex)` entry and stale entries are discarded lazily when
/// they surface at the top of the queue.
#[derive(Debug, Clone)]
pub struct Dijkstra<'g, G: Graph, D: DistanceMeasure> {
    paths: ShortestPathForest<'g, G, D>,
    queue: MinHeap<usize, D>,
}

impl<'g, G: Graph, D: DistanceMeasure> Dijkstra<'g, G, D> {
    /// Creates a search over `graph` with no sources.
    pub fn new(graph: &'g G) -> Self {
        Dijkstra {
            paths: ShortestPathForest::new(graph),
            queue: MinHeap::new(),
        }
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g G {
        self.paths.graph()
    }

    /// The shortest-path forest accumulated so far.
    pub fn shortest_path_forest(&self) -> &ShortestPathForest<'g, G, D> {
        &self.paths
    }

    /// Adds a source vertex at distance zero.
    ///
    /// The source must not have been reached yet.
    pub fn add_source(&mut self, source: usize) {
        assert!(
            !self.paths.has_reached_vertex(source),
            "source {source} has already been reached"
        );
        self.paths.make_root_vertex(source);
        self.paths.label_vertex_reached(source);
        self.paths.set_distance_to_vertex(source, D::zero());
        self.queue.push(source, D::zero());
    }

    /// Removes and returns the unvisited `(vertex, distance)` entry with the
    /// smallest distance, discarding visited and stale entries along the way.
    ///
    /// Callers must check [`done`](Dijkstra::done) first; panics if no
    /// unvisited entry remains.
    pub fn pop_next_unvisited_vertex(&mut self) -> (usize, D) {
        while let Some((vertex, distance)) = self.queue.pop() {
            if self.paths.has_visited_vertex(vertex) {
                continue;
            }
            if distance != self.paths.distance_to_vertex(vertex) {
                // Stale entry: the vertex was re-reached at a smaller
                // distance after this one was pushed.
                continue;
            }
            return (vertex, distance);
        }
        panic!("pop_next_unvisited_vertex called on an exhausted queue");
    }

    /// Records `head` as reached through `edge` from `tail` at `distance`.
    ///
    /// `head` must not have been visited.
    pub fn reach_vertex(&mut self, edge: usize, tail: usize, head: usize, distance: D) {
        debug_assert!(self.graph().contains_edge(edge));
        debug_assert!(!self.paths.has_visited_vertex(head));
        debug_assert!(distance >= self.paths.distance_to_vertex(tail));
        self.paths.set_predecessor(head, tail, edge);
        self.paths.label_vertex_reached(head);
        self.paths.set_distance_to_vertex(head, distance);
        self.queue.push(head, distance);
    }

    /// Marks `vertex` as visited; its distance is final.
    pub fn visit_vertex(&mut self, vertex: usize, distance: D) {
        debug_assert!(distance == self.paths.distance_to_vertex(vertex));
        self.paths.label_vertex_visited(vertex);
    }

    /// Relaxes `edge` from `tail` to `head` with tentative distance
    /// `distance` (the distance to `tail` plus the edge weight, which must be
    /// non-negative). Reaches `head` if this improves on its best-known
    /// distance.
    pub fn relax_edge(&mut self, edge: usize, tail: usize, head: usize, distance: D) {
        debug_assert!(distance >= self.paths.distance_to_vertex(tail));
        if self.paths.has_visited_vertex(head) {
            return;
        }
        if distance < self.paths.distance_to_vertex(head) {
            self.reach_vertex(edge, tail, head, distance);
        }
    }

    /// Returns true when no unvisited reached vertex remains in the queue.
    ///
    /// Discards visited and stale entries from the top of the queue as a side
    /// effect.
    pub fn done(&mut self) -> bool {
        while let Some((vertex, distance)) = self.queue.peek() {
            if !self.paths.has_visited_vertex(vertex)
                && distance == self.paths.distance_to_vertex(vertex)
            {
                return false;
            }
            self.queue.pop();
        }
        true
    }

    /// Runs the search to completion: repeatedly pop the closest unvisited
    /// vertex, visit it, and relax its outgoing edges using `edge_weight`.
    ///
    /// Edge weights must be non-negative.
    pub fn run<W>(&mut self, mut edge_weight: W)
    where
        W: FnMut(usize) -> D,
    {
        let graph = self.graph();
        while !self.done() {
            let (tail, distance) = self.pop_next_unvisited_vertex();
            self.visit_vertex(tail, distance);
            for (edge, head) in graph.outgoing_edges(tail) {
                self.relax_edge(edge, tail, head, distance + edge_weight(edge));
            }
        }
    }

    /// Delegated forest and label/distance accessors.
    pub fn has_reached_vertex(&self, vertex: usize) -> bool {
        self.paths.has_reached_vertex(vertex)
    }

    pub fn has_visited_vertex(&self, vertex: usize) -> bool {
        self.paths.has_visited_vertex(vertex)
    }

    pub fn distance_to_vertex(&self, vertex: usize) -> D {
        self.paths.distance_to_vertex(vertex)
    }

    pub fn predecessor_vertex(&self, vertex: usize) -> usize {
        self.paths.predecessor_vertex(vertex)
    }

    pub fn predecessor_edge(&self, vertex: usize) -> usize {
        self.paths.predecessor_edge(vertex)
    }

    pub fn predecessor(&self, vertex: usize) -> (usize, usize) {
        self.paths.predecessor(vertex)
    }

    pub fn is_root_vertex(&self, vertex: usize) -> bool {
        self.paths.is_root_vertex(vertex)
    }

    pub fn predecessors(&self, vertex: usize) -> Predecessors<'_, 'g, G> {
        self.paths.predecessors(vertex)
    }

    pub fn reached_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.paths.reached_vertices()
    }

    pub fn visited_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.paths.visited_vertices()
    }

    /// Resets the search for reuse: every vertex unreached at infinite
    /// distance, queue empty. Does not reallocate.
    pub fn reset(&mut self) {
        self.paths.reset();
        self.queue.clear();
    }
}
