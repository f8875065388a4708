use crate::data_structures::BucketRing;
use crate::forest::{Predecessors, ShortestPathForest};
use crate::graph::Graph;
use crate::measure::{CostMeasure, FlowMeasure, IntegralMeasure};
use crate::network::{CapacityPolicy, ResidualGraph, ResidualNetwork};

/// Scans all admissible (non-saturated, finite-length, non-negative) arcs of
/// a residual network and returns the maximum arc length with respect to the
/// reduced costs under the network's current potentials.
///
/// Panics if any admissible arc length is NaN or negative. Infinite lengths
/// are skipped.
pub fn max_admissible_arc_length<G, C, F, P>(network: &ResidualNetwork<'_, G, C, F, P>) -> C
where
    G: Graph,
    C: CostMeasure,
    F: FlowMeasure,
    P: CapacityPolicy<F>,
{
    let mut max_arc_length = C::zero();

    for tail in network.nodes() {
        for (arc, head) in network.outgoing_arcs(tail) {
            if network.is_arc_saturated(arc) {
                continue;
            }

            let arc_length = network.arc_reduced_cost(arc, tail, head);
            assert!(!arc_length.is_nan(), "arc {arc} has NaN reduced cost");
            assert!(
                arc_length >= C::zero(),
                "arc {arc} has negative reduced cost"
            );
            if arc_length.is_infinite() {
                continue;
            }

            max_arc_length = max_arc_length.max(arc_length);
        }
    }

    max_arc_length
}

/// Dial's shortest-path search: a ring of FIFO buckets indexed by distance
/// modulo the ring length.
///
/// When edge weights are integers in `[0, C]`, a ring of `C + 1` buckets
/// suffices: all unvisited reached vertices lie within a `C`-wide distance
/// window at any moment, so they map to distinct buckets and the current
/// bucket always holds the minimum-distance unvisited vertex when non-empty.
/// This replaces the `O(log n)` heap operations of [`Dijkstra`] with `O(1)`
/// bucket pushes, giving `O(|E| + |V| * C)` time.
///
/// The driving loop and operation contracts are the same as
/// [`Dijkstra`](crate::Dijkstra); only the queue mechanics differ. The
/// distance type must be an integer type.
///
/// [`Dijkstra`]: crate::Dijkstra
#[derive(Debug, Clone)]
pub struct Dial<'g, G: Graph, D: IntegralMeasure> {
    paths: ShortestPathForest<'g, G, D>,
    buckets: BucketRing,
}

impl<'g, G: Graph, D: IntegralMeasure> Dial<'g, G, D> {
    /// Creates a search over `graph` with an explicit number of buckets.
    ///
    /// `num_buckets` must exceed the largest edge weight the search will see.
    /// A search with zero buckets is immediately [`done`](Dial::done) and
    /// cannot accept sources.
    pub fn new(graph: &'g G, num_buckets: usize) -> Self {
        Dial {
            paths: ShortestPathForest::new(graph),
            buckets: BucketRing::new(num_buckets),
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

    /// Returns the number of buckets in the ring.
    pub fn num_buckets(&self) -> usize {
        self.buckets.num_buckets()
    }

    /// Returns the index of the bucket at the head of the ring.
    pub fn current_bucket_id(&self) -> usize {
        self.buckets.current_bucket_id()
    }

    /// Maps a distance to the bucket holding vertices at that distance.
    pub fn bucket_id(&self, distance: D) -> usize {
        self.buckets.bucket_id(distance.to_index())
    }

    /// Places `vertex` into the bucket for `distance`.
    pub fn push_vertex(&mut self, vertex: usize, distance: D) {
        assert!(self.num_buckets() >= 1, "bucket ring is empty");
        debug_assert!(self.paths.has_reached_vertex(vertex));
        self.buckets.push(vertex, distance.to_index());
    }

    /// Adds a source vertex at distance zero.
    ///
    /// The source must not have been reached yet and the ring must be
    /// non-empty.
    pub fn add_source(&mut self, source: usize) {
        assert!(
            !self.paths.has_reached_vertex(source),
            "source {source} has already been reached"
        );
        assert!(self.num_buckets() > 0, "bucket ring is empty");
        self.paths.make_root_vertex(source);
        self.paths.label_vertex_reached(source);
        self.paths.set_distance_to_vertex(source, D::zero());
        self.push_vertex(source, D::zero());
    }

    /// Removes and returns the `(vertex, distance)` entry at the front of the
    /// current bucket.
    ///
    /// Callers must check [`done`](Dial::done) first: `done` is what discards
    /// visited entries and advances the ring, leaving an unvisited vertex at
    /// the front of the current bucket.
    pub fn pop_next_unvisited_vertex(&mut self) -> (usize, D) {
        let vertex = self
            .buckets
            .pop_front()
            .expect("pop_next_unvisited_vertex called on an empty bucket");
        debug_assert!(self.paths.has_reached_vertex(vertex));
        debug_assert!(!self.paths.has_visited_vertex(vertex));
        (vertex, self.paths.distance_to_vertex(vertex))
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
        self.push_vertex(head, distance);
    }

    /// Marks `vertex` as visited; its distance is final.
    pub fn visit_vertex(&mut self, vertex: usize, distance: D) {
        debug_assert!(distance == self.paths.distance_to_vertex(vertex));
        self.paths.label_vertex_visited(vertex);
    }

    /// Relaxes `edge` from `tail` to `head` with tentative distance
    /// `distance`. Reaches `head` if this improves on its best-known
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

    /// Advances the ring cursor to the next bucket, wrapping around.
    pub fn advance_current_bucket(&mut self) {
        self.buckets.advance();
    }

    /// Returns true when no unvisited reached vertex remains in any bucket.
    ///
    /// Scans cyclically from the current bucket over at most `num_buckets`
    /// positions: visited vertices are discarded from each bucket's front,
    /// the cursor advances past emptied buckets, and the scan stops early at
    /// the first unvisited vertex. The cursor never skips a non-empty
    /// unvisited prefix.
    pub fn done(&mut self) -> bool {
        if self.num_buckets() == 0 {
            return true;
        }

        let start_bucket_id = self.current_bucket_id();
        loop {
            while let Some(front) = self.buckets.front() {
                if !self.paths.has_visited_vertex(front) {
                    return false;
                }
                self.buckets.pop_front();
            }

            self.advance_current_bucket();
            if self.current_bucket_id() == start_bucket_id {
                return true;
            }
        }
    }

    /// Runs the search to completion: repeatedly pop the closest unvisited
    /// vertex, visit it, and relax its outgoing edges using `edge_weight`.
    ///
    /// Every edge weight must be a non-negative integer smaller than the
    /// number of buckets.
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
    /// distance, every bucket empty, cursor on bucket 0. Does not
    /// reallocate.
    pub fn reset(&mut self) {
        self.paths.reset();
        self.buckets.clear();
    }
}

impl<'n, D: IntegralMeasure + CostMeasure> Dial<'n, ResidualGraph, D> {
    /// Creates a search over a residual network's doubled-arc graph, sizing
    /// the bucket ring from the maximum admissible reduced arc cost `L` as
    /// `L + 1` buckets.
    ///
    /// The probe runs against the network's potentials at construction time;
    /// a caller that updates potentials afterwards should build a new search,
    /// as the bucket sizing is not re-validated.
    pub fn from_network<G, F, P>(network: &'n ResidualNetwork<'_, G, D, F, P>) -> Self
    where
        G: Graph,
        F: FlowMeasure,
        P: CapacityPolicy<F>,
    {
        let max_arc_length = max_admissible_arc_length(network);
        let num_buckets = max_arc_length.to_index() + 1;
        Dial::new(network.residual_graph(), num_buckets)
    }
}
