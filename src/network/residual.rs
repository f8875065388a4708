use crate::graph::Graph;
use crate::measure::{CostMeasure, FlowMeasure};
use crate::network::capacity::{CapacityPolicy, Uncapacitated, UnitCapacity};
use crate::{Error, Result};

/// The doubled-arc directed graph underlying a residual network.
///
/// Every edge `e` of the original graph contributes two arcs: forward arc `e`
/// with the original orientation and reverse arc `e + E` with the opposite
/// orientation, where `E` is the original edge count. The transpose of an arc
/// is therefore always `arc ± E`.
///
/// Unlike [`CsrGraph`](crate::CsrGraph), arc ids are not positional in the
/// adjacency arrays, so each adjacency slot stores its arc id explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualGraph {
    offsets: Vec<usize>,
    arc_ids: Vec<usize>,
    heads: Vec<usize>,
    num_forward_arcs: usize,
}

impl ResidualGraph {
    /// Builds the doubled-arc graph of `graph`.
    pub fn from_graph<G: Graph>(graph: &G) -> Self {
        let num_vertices = graph.num_vertices();
        let num_edges = graph.num_edges();

        // Each vertex's residual degree is its out-degree plus its in-degree.
        let mut offsets = vec![0usize; num_vertices + 1];
        for tail in graph.vertices() {
            for (_, head) in graph.outgoing_edges(tail) {
                offsets[tail + 1] += 1;
                offsets[head + 1] += 1;
            }
        }
        for v in 0..num_vertices {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor: Vec<usize> = offsets[..num_vertices].to_vec();
        let mut arc_ids = vec![0usize; 2 * num_edges];
        let mut heads = vec![0usize; 2 * num_edges];
        for tail in graph.vertices() {
            for (edge, head) in graph.outgoing_edges(tail) {
                let edge_id = graph.get_edge_id(edge);
                arc_ids[cursor[tail]] = edge_id;
                heads[cursor[tail]] = head;
                cursor[tail] += 1;
                arc_ids[cursor[head]] = num_edges + edge_id;
                heads[cursor[head]] = tail;
                cursor[head] += 1;
            }
        }

        debug_assert_eq!(offsets[num_vertices], 2 * num_edges);
        ResidualGraph {
            offsets,
            arc_ids,
            heads,
            num_forward_arcs: num_edges,
        }
    }

    /// The number of forward arcs (= the original edge count).
    pub fn num_forward_arcs(&self) -> usize {
        self.num_forward_arcs
    }

    /// True if `arc` came from the original graph (as opposed to being the
    /// reversal of an original edge).
    pub fn is_forward_arc(&self, arc: usize) -> bool {
        assert!(self.contains_edge(arc), "arc {arc} out of range");
        arc < self.num_forward_arcs
    }

    /// The arc with the opposite orientation over the same original edge.
    pub fn transpose_arc_id(&self, arc: usize) -> usize {
        assert!(self.contains_edge(arc), "arc {arc} out of range");
        if arc < self.num_forward_arcs {
            arc + self.num_forward_arcs
        } else {
            arc - self.num_forward_arcs
        }
    }

    /// The original edge an arc was derived from.
    pub fn edge_id_of_arc(&self, arc: usize) -> usize {
        assert!(self.contains_edge(arc), "arc {arc} out of range");
        if arc < self.num_forward_arcs {
            arc
        } else {
            arc - self.num_forward_arcs
        }
    }

    /// The forward arc corresponding to an original edge.
    pub fn arc_id_of_edge(&self, edge: usize) -> usize {
        assert!(edge < self.num_forward_arcs, "edge {edge} out of range");
        edge
    }
}

impl Graph for ResidualGraph {
    type OutgoingEdges<'a> = std::iter::Zip<
        std::iter::Copied<std::slice::Iter<'a, usize>>,
        std::iter::Copied<std::slice::Iter<'a, usize>>,
    >
    where
        Self: 'a;

    fn num_vertices(&self) -> usize {
        debug_assert!(!self.offsets.is_empty());
        self.offsets.len() - 1
    }

    fn num_edges(&self) -> usize {
        self.arc_ids.len()
    }

    fn out_degree(&self, vertex: usize) -> usize {
        assert!(self.contains_vertex(vertex), "vertex {vertex} out of range");
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    fn outgoing_edges(&self, vertex: usize) -> Self::OutgoingEdges<'_> {
        assert!(self.contains_vertex(vertex), "vertex {vertex} out of range");
        let lo = self.offsets[vertex];
        let hi = self.offsets[vertex + 1];
        self.arc_ids[lo..hi]
            .iter()
            .copied()
            .zip(self.heads[lo..hi].iter().copied())
    }
}

/// A residual network over a directed graph: the substrate for
/// minimum-cost-flow pivots.
///
/// Wraps an (unowned) underlying graph with an owned doubled-arc
/// [`ResidualGraph`] and per-node/per-arc state: signed node excess, node
/// potentials (the duals used for reduced costs), per-arc costs (reverse arcs
/// carry the negated cost of their transpose), and capacity/flow state
/// delegated to a [`CapacityPolicy`].
///
/// Shortest-path searches over [`residual_graph`](ResidualNetwork::residual_graph)
/// use [`arc_reduced_cost`](ResidualNetwork::arc_reduced_cost) as the arc
/// length; on the arcs such a search traverses the caller must keep reduced
/// costs non-negative and finite.
#[derive(Debug, Clone)]
pub struct ResidualNetwork<'g, G: Graph, C: CostMeasure, F: FlowMeasure, P: CapacityPolicy<F>> {
    graph: &'g G,
    residual: ResidualGraph,
    node_excess: Vec<F>,
    node_potential: Vec<C>,
    arc_cost: Vec<C>,
    capacity: P,
}

/// A residual network with unbounded forward arc capacities.
pub type UncapacitatedNetwork<'g, G, C, F> = ResidualNetwork<'g, G, C, F, Uncapacitated<F>>;

/// A residual network in which every forward arc has capacity one.
pub type UnitCapacityNetwork<'g, G, C, F> = ResidualNetwork<'g, G, C, F, UnitCapacity>;

impl<'g, G, C, F, P> ResidualNetwork<'g, G, C, F, P>
where
    G: Graph,
    C: CostMeasure,
    F: FlowMeasure,
    P: CapacityPolicy<F>,
{
    /// Builds a residual network over `graph` from a per-node initial surplus
    /// and a per-edge forward cost, with zero potentials and zero flow.
    ///
    /// Forward costs must be non-negative ([`Error::NegativeCost`]); NaN
    /// costs panic. The surplus and cost arrays must have one entry per
    /// vertex and per edge respectively.
    pub fn new(graph: &'g G, surplus: Vec<F>, forward_cost: &[C]) -> Result<Self> {
        if surplus.len() != graph.num_vertices() {
            return Err(Error::SurplusLengthMismatch {
                actual: surplus.len(),
                expected: graph.num_vertices(),
            });
        }
        if forward_cost.len() != graph.num_edges() {
            return Err(Error::CostLengthMismatch {
                actual: forward_cost.len(),
                expected: graph.num_edges(),
            });
        }
        for (edge, &cost) in forward_cost.iter().enumerate() {
            assert!(!cost.is_nan(), "cost of edge {edge} is NaN");
            if cost < C::zero() {
                return Err(Error::NegativeCost(edge));
            }
        }

        let residual = ResidualGraph::from_graph(graph);
        let num_nodes = graph.num_vertices();
        let num_edges = graph.num_edges();

        let mut arc_cost = Vec::with_capacity(2 * num_edges);
        arc_cost.extend_from_slice(forward_cost);
        arc_cost.extend(forward_cost.iter().map(|&cost| -cost));

        Ok(ResidualNetwork {
            graph,
            residual,
            node_excess: surplus,
            node_potential: vec![C::zero(); num_nodes],
            arc_cost,
            capacity: P::new(num_edges),
        })
    }

    /// The underlying (undoubled) graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The doubled-arc residual graph.
    pub fn residual_graph(&self) -> &ResidualGraph {
        &self.residual
    }

    /// The total number of nodes in the network.
    pub fn num_nodes(&self) -> usize {
        self.residual.num_vertices()
    }

    /// The total number of arcs in the residual graph, including arcs whose
    /// residual capacity is zero.
    pub fn num_arcs(&self) -> usize {
        self.residual.num_edges()
    }

    /// The number of forward arcs (= the original edge count).
    pub fn num_forward_arcs(&self) -> usize {
        self.residual.num_forward_arcs()
    }

    /// Returns true if the network contains the node.
    pub fn contains_node(&self, node: usize) -> bool {
        self.residual.contains_vertex(node)
    }

    /// Returns true if the residual graph contains the arc. Arcs with zero
    /// residual capacity are still contained.
    pub fn contains_arc(&self, arc: usize) -> bool {
        self.residual.contains_edge(arc)
    }

    /// The array index of a node, in `[0, num_nodes())`.
    pub fn get_node_id(&self, node: usize) -> usize {
        self.residual.get_vertex_id(node)
    }

    /// The array index of an arc, in `[0, num_arcs())`.
    pub fn get_arc_id(&self, arc: usize) -> usize {
        self.residual.get_edge_id(arc)
    }

    /// Returns an iterator over all node ids in ascending order.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        self.residual.vertices()
    }

    /// Returns an iterator over all arc ids in ascending order.
    pub fn arcs(&self) -> std::ops::Range<usize> {
        self.residual.edges()
    }

    /// Returns an iterator over the forward arc ids.
    pub fn forward_arcs(&self) -> std::ops::Range<usize> {
        0..self.residual.num_forward_arcs()
    }

    /// True if `arc` is a forward arc.
    pub fn is_forward_arc(&self, arc: usize) -> bool {
        self.residual.is_forward_arc(arc)
    }

    /// The arc with the opposite orientation over the same original edge.
    pub fn transpose_arc_id(&self, arc: usize) -> usize {
        self.residual.transpose_arc_id(arc)
    }

    /// Returns an iterator over the `(arc, head)` pairs leaving a node in the
    /// residual graph.
    pub fn outgoing_arcs(&self, node: usize) -> <ResidualGraph as Graph>::OutgoingEdges<'_> {
        self.residual.outgoing_edges(node)
    }

    /// The signed flow surplus of a node: positive for sources, negative for
    /// sinks, zero for transshipment nodes.
    pub fn node_excess(&self, node: usize) -> F {
        assert!(self.contains_node(node), "node {node} out of range");
        self.node_excess[self.get_node_id(node)]
    }

    pub fn increase_node_excess(&mut self, node: usize, delta: F) {
        assert!(self.contains_node(node), "node {node} out of range");
        let node_id = self.get_node_id(node);
        self.node_excess[node_id] += delta;
    }

    pub fn decrease_node_excess(&mut self, node: usize, delta: F) {
        assert!(self.contains_node(node), "node {node} out of range");
        let node_id = self.get_node_id(node);
        self.node_excess[node_id] -= delta;
    }

    /// True if the node has positive excess.
    pub fn is_excess_node(&self, node: usize) -> bool {
        self.node_excess(node) > F::zero()
    }

    /// True if the node has negative excess.
    pub fn is_deficit_node(&self, node: usize) -> bool {
        self.node_excess(node) < F::zero()
    }

    /// Returns an iterator over the nodes with positive excess.
    pub fn excess_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes().filter(move |&node| self.is_excess_node(node))
    }

    /// Returns an iterator over the nodes with negative excess.
    pub fn deficit_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes().filter(move |&node| self.is_deficit_node(node))
    }

    /// The sum of the surplus of all excess nodes.
    ///
    /// Accumulates in the flow type; callers should pick a flow type wide
    /// enough for the sum of all positive excesses.
    pub fn total_excess(&self) -> F {
        self.excess_nodes()
            .fold(F::zero(), |total, node| total + self.node_excess(node))
    }

    /// The sum of the surplus of all deficit nodes (a non-positive value).
    pub fn total_deficit(&self) -> F {
        self.deficit_nodes()
            .fold(F::zero(), |total, node| total + self.node_excess(node))
    }

    /// True when the node excesses sum to zero.
    pub fn is_balanced(&self) -> bool {
        self.node_excess
            .iter()
            .fold(F::zero(), |total, &excess| total + excess)
            .is_zero()
    }

    /// The dual variable of a node, used to compute reduced costs.
    pub fn node_potential(&self, node: usize) -> C {
        assert!(self.contains_node(node), "node {node} out of range");
        self.node_potential[self.get_node_id(node)]
    }

    pub fn increase_node_potential(&mut self, node: usize, delta: C) {
        assert!(self.contains_node(node), "node {node} out of range");
        let node_id = self.get_node_id(node);
        self.node_potential[node_id] = self.node_potential[node_id] + delta;
    }

    pub fn decrease_node_potential(&mut self, node: usize, delta: C) {
        assert!(self.contains_node(node), "node {node} out of range");
        let node_id = self.get_node_id(node);
        self.node_potential[node_id] = self.node_potential[node_id] - delta;
    }

    /// The cost per unit of flow in an arc. Reverse arcs carry the negation
    /// of their transpose's cost.
    pub fn arc_cost(&self, arc: usize) -> C {
        assert!(self.contains_arc(arc), "arc {arc} out of range");
        self.arc_cost[self.get_arc_id(arc)]
    }

    /// The cost of an arc adjusted by the potentials of its endpoints:
    /// `arc_cost(arc) - potential(tail) + potential(head)`.
    pub fn arc_reduced_cost(&self, arc: usize, tail: usize, head: usize) -> C {
        self.arc_cost(arc) - self.node_potential(tail) + self.node_potential(head)
    }

    /// The upper capacity of an arc.
    pub fn arc_capacity(&self, arc: usize) -> F {
        assert!(self.contains_arc(arc), "arc {arc} out of range");
        self.capacity.arc_capacity(arc)
    }

    /// The amount of flow in an arc.
    pub fn arc_flow(&self, arc: usize) -> F {
        assert!(self.contains_arc(arc), "arc {arc} out of range");
        self.capacity.arc_flow(arc)
    }

    /// The residual capacity of an arc.
    pub fn arc_residual_capacity(&self, arc: usize) -> F {
        assert!(self.contains_arc(arc), "arc {arc} out of range");
        self.capacity.arc_residual_capacity(arc)
    }

    /// True when the arc's residual capacity is zero.
    pub fn is_arc_saturated(&self, arc: usize) -> bool {
        assert!(self.contains_arc(arc), "arc {arc} out of range");
        self.capacity.is_arc_saturated(arc)
    }

    /// Adds `delta` units of flow to `arc` and removes `delta` units from its
    /// transpose. Does not modify node excesses.
    ///
    /// `delta` must be positive and at most the arc's residual capacity.
    pub fn increase_arc_flow(&mut self, arc: usize, delta: F) {
        assert!(self.contains_arc(arc), "arc {arc} out of range");
        self.capacity.increase_arc_flow(arc, delta);
    }

    /// The total cost of the current flow: the sum over forward arcs of
    /// `arc_cost * arc_flow`.
    pub fn total_cost(&self) -> C
    where
        F: Into<C>,
    {
        self.forward_arcs().fold(C::zero(), |total, arc| {
            total + self.arc_cost(arc) * self.arc_flow(arc).into()
        })
    }
}
