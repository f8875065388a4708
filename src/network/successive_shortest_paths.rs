//! Minimum-cost flow by successive shortest augmenting paths.

use log::debug;

use crate::algorithm::Dijkstra;
use crate::graph::Graph;
use crate::measure::{CostMeasure, FlowMeasure};
use crate::network::capacity::CapacityPolicy;
use crate::network::residual::{ResidualGraph, ResidualNetwork};
use crate::{Error, Result};

/// Computes a minimum-cost flow on a balanced residual network.
///
/// Repeatedly picks an excess node, finds the shortest path (with respect to
/// reduced arc costs) to the nearest deficit node, pushes one unit of flow
/// along it, and raises the potentials of the visited nodes so that reduced
/// costs stay non-negative for the next search. On success the network is
/// balanced with every node excess zero;
/// [`total_cost`](ResidualNetwork::total_cost) gives the cost of the
/// resulting flow.
///
/// Returns [`Error::Unbalanced`] if the node excesses do not sum to zero and
/// [`Error::Infeasible`] if some excess cannot reach any deficit node through
/// unsaturated arcs.
pub fn successive_shortest_paths<G, C, F, P>(
    network: &mut ResidualNetwork<'_, G, C, F, P>,
) -> Result<()>
where
    G: Graph,
    C: CostMeasure,
    F: FlowMeasure,
    P: CapacityPolicy<F>,
{
    if !network.is_balanced() {
        return Err(Error::Unbalanced);
    }

    // The search borrows the residual topology while the network's flow and
    // potential state is mutated between searches, so it runs over a private
    // copy of the (immutable) topology.
    let residual = network.residual_graph().clone();
    let mut dijkstra: Dijkstra<'_, ResidualGraph, C> = Dijkstra::new(&residual);

    let mut augmentation = 0usize;
    loop {
        let source = match network.excess_nodes().next() {
            Some(node) => node,
            None => break,
        };

        dijkstra.reset();
        let sink = search_to_nearest_deficit(&mut dijkstra, network, source)
            .ok_or(Error::Infeasible(source))?;

        augment_flow(network, &dijkstra, sink);
        update_potentials(network, &dijkstra, sink);

        augmentation += 1;
        if augmentation % 100 == 0 {
            debug!("augmentation {augmentation}: pushed one unit from {source} to {sink}");
        }
    }

    debug!("minimum-cost flow complete after {augmentation} augmentations");
    Ok(())
}

/// Grows a shortest-path tree from `source` over the unsaturated arcs of the
/// residual graph, using reduced costs as arc lengths, and stops at the first
/// deficit node visited. Returns `None` if no deficit node is reachable.
fn search_to_nearest_deficit<G, C, F, P>(
    dijkstra: &mut Dijkstra<'_, ResidualGraph, C>,
    network: &ResidualNetwork<'_, G, C, F, P>,
    source: usize,
) -> Option<usize>
where
    G: Graph,
    C: CostMeasure,
    F: FlowMeasure,
    P: CapacityPolicy<F>,
{
    dijkstra.add_source(source);

    while !dijkstra.done() {
        let (tail, distance) = dijkstra.pop_next_unvisited_vertex();
        dijkstra.visit_vertex(tail, distance);

        if network.is_deficit_node(tail) {
            return Some(tail);
        }

        for (arc, head) in network.outgoing_arcs(tail) {
            if network.is_arc_saturated(arc) {
                continue;
            }
            let arc_length = network.arc_reduced_cost(arc, tail, head);
            debug_assert!(arc_length >= C::zero());
            dijkstra.relax_edge(arc, tail, head, distance + arc_length);
        }
    }

    None
}

/// Pushes one unit of flow along the tree path from the search root to
/// `sink`, transferring one unit of excess from the root to the sink.
fn augment_flow<G, C, F, P>(
    network: &mut ResidualNetwork<'_, G, C, F, P>,
    dijkstra: &Dijkstra<'_, ResidualGraph, C>,
    sink: usize,
) where
    G: Graph,
    C: CostMeasure,
    F: FlowMeasure,
    P: CapacityPolicy<F>,
{
    let delta = F::one();

    debug_assert!(network.is_deficit_node(sink));
    network.increase_node_excess(sink, delta);

    let mut path_root = sink;
    for (tail, arc) in dijkstra.predecessors(sink) {
        debug_assert!(network.arc_residual_capacity(arc) >= delta);
        network.increase_arc_flow(arc, delta);
        path_root = tail;
    }

    debug_assert!(network.is_excess_node(path_root));
    network.decrease_node_excess(path_root, delta);
}

/// Raises the potential of every visited node by `dist(sink) - dist(node)`,
/// which keeps reduced costs non-negative on all unsaturated arcs after the
/// augmentation.
fn update_potentials<G, C, F, P>(
    network: &mut ResidualNetwork<'_, G, C, F, P>,
    dijkstra: &Dijkstra<'_, ResidualGraph, C>,
    sink: usize,
) where
    G: Graph,
    C: CostMeasure,
    F: FlowMeasure,
    P: CapacityPolicy<F>,
{
    let distance_to_sink = dijkstra.distance_to_vertex(sink);

    for node in dijkstra.visited_vertices() {
        let distance = dijkstra.distance_to_vertex(node);
        debug_assert!(distance <= distance_to_sink);
        network.increase_node_potential(node, distance_to_sink - distance);
    }
}
