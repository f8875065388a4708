use crate::forest::Forest;
use crate::graph::Graph;
use crate::measure::DistanceMeasure;

/// Search progress of a vertex.
///
/// Labels only ever move forward: unreached, then reached, then visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Label {
    Unreached,
    Reached,
    Visited,
}

/// A predecessor forest extended with per-vertex label and distance state.
///
/// This is the shared scaffold of the shortest-path searches: the forest
/// records the tree of best-known paths, `label` tracks each vertex's search
/// progress, and `distance` its best-known distance from the source set
/// (initially the infinity sentinel).
#[derive(Debug, Clone)]
pub struct ShortestPathForest<'g, G: Graph, D: DistanceMeasure> {
    forest: Forest<'g, G>,
    label: Vec<Label>,
    distance: Vec<D>,
}

impl<'g, G: Graph, D: DistanceMeasure> ShortestPathForest<'g, G, D> {
    /// Creates a forest with every vertex unreached at infinite distance.
    pub fn new(graph: &'g G) -> Self {
        let num_vertices = graph.num_vertices();
        ShortestPathForest {
            forest: Forest::new(graph),
            label: vec![Label::Unreached; num_vertices],
            distance: vec![D::infinity(); num_vertices],
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g G {
        self.forest.graph()
    }

    /// The underlying predecessor forest.
    pub fn forest(&self) -> &Forest<'g, G> {
        &self.forest
    }

    /// Returns true if `vertex` has been reached (or visited).
    pub fn has_reached_vertex(&self, vertex: usize) -> bool {
        let graph = self.graph();
        assert!(graph.contains_vertex(vertex), "vertex {vertex} out of range");
        self.label[graph.get_vertex_id(vertex)] != Label::Unreached
    }

    /// Returns true if `vertex` has been visited.
    pub fn has_visited_vertex(&self, vertex: usize) -> bool {
        let graph = self.graph();
        assert!(graph.contains_vertex(vertex), "vertex {vertex} out of range");
        self.label[graph.get_vertex_id(vertex)] == Label::Visited
    }

    /// Marks an unvisited vertex as reached.
    ///
    /// A vertex may be reached multiple times but visited only once; once
    /// visited it may no longer be reached.
    pub fn label_vertex_reached(&mut self, vertex: usize) {
        assert!(
            !self.has_visited_vertex(vertex),
            "vertex {vertex} has already been visited"
        );
        let vertex_id = self.graph().get_vertex_id(vertex);
        self.label[vertex_id] = Label::Reached;
    }

    /// Marks an unvisited vertex as visited.
    pub fn label_vertex_visited(&mut self, vertex: usize) {
        assert!(
            !self.has_visited_vertex(vertex),
            "vertex {vertex} has already been visited"
        );
        let vertex_id = self.graph().get_vertex_id(vertex);
        self.label[vertex_id] = Label::Visited;
    }

    /// Returns the best-known distance to `vertex` (the infinity sentinel if
    /// unreached).
    pub fn distance_to_vertex(&self, vertex: usize) -> D {
        let graph = self.graph();
        assert!(graph.contains_vertex(vertex), "vertex {vertex} out of range");
        self.distance[graph.get_vertex_id(vertex)]
    }

    /// Sets the distance to `vertex`.
    pub fn set_distance_to_vertex(&mut self, vertex: usize, distance: D) {
        let graph = self.graph();
        assert!(graph.contains_vertex(vertex), "vertex {vertex} out of range");
        let vertex_id = graph.get_vertex_id(vertex);
        self.distance[vertex_id] = distance;
    }

    /// Returns an iterator over all reached (including visited) vertices.
    pub fn reached_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.graph()
            .vertices()
            .filter(move |&vertex| self.has_reached_vertex(vertex))
    }

    /// Returns an iterator over all visited vertices.
    pub fn visited_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.graph()
            .vertices()
            .filter(move |&vertex| self.has_visited_vertex(vertex))
    }

    /// Forest accessors, delegated.
    pub fn predecessor_vertex(&self, vertex: usize) -> usize {
        self.forest.predecessor_vertex(vertex)
    }

    pub fn predecessor_edge(&self, vertex: usize) -> usize {
        self.forest.predecessor_edge(vertex)
    }

    pub fn predecessor(&self, vertex: usize) -> (usize, usize) {
        self.forest.predecessor(vertex)
    }

    pub fn set_predecessor(&mut self, vertex: usize, parent_vertex: usize, parent_edge: usize) {
        self.forest.set_predecessor(vertex, parent_vertex, parent_edge)
    }

    pub fn make_root_vertex(&mut self, vertex: usize) {
        self.forest.make_root_vertex(vertex)
    }

    pub fn is_root_vertex(&self, vertex: usize) -> bool {
        self.forest.is_root_vertex(vertex)
    }

    pub fn predecessors(&self, vertex: usize) -> crate::forest::Predecessors<'_, 'g, G> {
        self.forest.predecessors(vertex)
    }

    /// Resets the forest and marks every vertex unreached at infinite
    /// distance. Does not reallocate.
    pub fn reset(&mut self) {
        self.forest.reset();
        self.label.fill(Label::Unreached);
        self.distance.fill(D::infinity());
    }
}
