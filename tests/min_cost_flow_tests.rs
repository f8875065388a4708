use sparseflow::network::{UncapacitatedNetwork, UnitCapacityNetwork};
use sparseflow::{successive_shortest_paths, CsrGraph, Error, ResidualNetwork};

/// 3 nodes; edge ids (tail-grouped): 0: (0,1) c=2, 1: (0,2) c=7, 2: (1,2) c=3.
fn triangle_graph() -> CsrGraph {
    CsrGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]).unwrap()
}

#[test]
fn test_unit_capacity_single_unit() {
    let graph = triangle_graph();
    let mut network: UnitCapacityNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![1, 0, -1], &[2, 7, 3]).unwrap();

    successive_shortest_paths(&mut network).unwrap();

    for node in network.nodes() {
        assert_eq!(network.node_excess(node), 0, "all excess is drained");
    }

    // The two-hop path 0 -> 1 -> 2 costs 5, beating the direct arc at 7.
    assert_eq!(network.arc_flow(0), 1);
    assert_eq!(network.arc_flow(2), 1);
    assert_eq!(network.arc_flow(1), 0);
    assert_eq!(network.total_cost(), 5);
}

#[test]
fn test_unit_capacity_parallel_paths() {
    // Two units must leave node 0, but each unit-capacity arc carries at most
    // one: the cheap path takes the first unit, the direct arc the second.
    let graph = triangle_graph();
    let mut network: UnitCapacityNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![2, 0, -2], &[2, 7, 3]).unwrap();

    successive_shortest_paths(&mut network).unwrap();

    for node in network.nodes() {
        assert_eq!(network.node_excess(node), 0);
    }
    assert_eq!(network.arc_flow(0), 1);
    assert_eq!(network.arc_flow(1), 1);
    assert_eq!(network.arc_flow(2), 1);
    assert_eq!(network.total_cost(), 5 + 7);
}

#[test]
fn test_uncapacitated_reuses_cheapest_path() {
    let graph = triangle_graph();
    let mut network: UncapacitatedNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![2, 0, -2], &[2, 7, 3]).unwrap();

    successive_shortest_paths(&mut network).unwrap();

    for node in network.nodes() {
        assert_eq!(network.node_excess(node), 0);
    }
    assert_eq!(network.arc_flow(0), 2, "both units take the cheap path");
    assert_eq!(network.arc_flow(2), 2);
    assert_eq!(network.arc_flow(1), 0);
    assert_eq!(network.total_cost(), 10);
}

#[test]
fn test_multiple_sources_and_sinks() {
    // 0 and 1 each supply one unit; 3 and 4 each demand one.
    //
    //   0 --1--> 2 --1--> 3
    //   1 --2--> 2 --4--> 4
    let graph =
        CsrGraph::from_edges(5, &[(0, 2), (1, 2), (2, 3), (2, 4)]).unwrap();
    let mut network: UncapacitatedNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![1, 1, 0, -1, -1], &[1, 2, 1, 4]).unwrap();

    successive_shortest_paths(&mut network).unwrap();

    for node in network.nodes() {
        assert_eq!(network.node_excess(node), 0);
    }
    assert_eq!(network.arc_flow(0), 1);
    assert_eq!(network.arc_flow(1), 1);
    assert_eq!(network.arc_flow(2), 1);
    assert_eq!(network.arc_flow(3), 1);
    assert_eq!(network.total_cost(), 1 + 2 + 1 + 4);
}

#[test]
fn test_augmentation_can_cancel_earlier_flow() {
    // Unit capacities. Edge ids (tail-grouped):
    //   0: (0,2) c=0,  1: (0,3) c=1,  2: (1,2) c=5,  3: (2,3) c=0
    // Supply 0:+1, 1:+1, demand 3:-2.
    //
    // Source 0 first saturates the free path 0->2->3. Source 1 then routes
    // 1->2, finds 2->3 saturated, and walks the reverse of 0->2 back to node
    // 0 to leave through the direct arc 0->3: the second augmentation cancels
    // the first unit off 0->2.
    let graph = CsrGraph::from_edges(4, &[(0, 2), (0, 3), (1, 2), (2, 3)]).unwrap();
    let mut network: UnitCapacityNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![1, 1, 0, -2], &[0, 1, 5, 0]).unwrap();

    successive_shortest_paths(&mut network).unwrap();

    for node in network.nodes() {
        assert_eq!(network.node_excess(node), 0);
    }
    assert!(network.is_balanced());
    assert_eq!(network.arc_flow(0), 0, "the first unit was cancelled off 0->2");
    assert_eq!(network.arc_flow(1), 1);
    assert_eq!(network.arc_flow(2), 1);
    assert_eq!(network.arc_flow(3), 1);
    assert_eq!(network.total_cost(), 5 + 1);
}

#[test]
fn test_unbalanced_network_is_rejected() {
    let graph = triangle_graph();
    let mut network: UnitCapacityNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![1, 0, 0], &[2, 7, 3]).unwrap();

    assert_eq!(
        successive_shortest_paths(&mut network),
        Err(Error::Unbalanced)
    );
}

#[test]
fn test_unreachable_deficit_is_infeasible() {
    // The only edge points the wrong way: 1 -> 0, but the excess sits at 0.
    let graph = CsrGraph::from_edges(2, &[(1, 0)]).unwrap();
    let mut network: UnitCapacityNetwork<CsrGraph, i64, i64> =
        ResidualNetwork::new(&graph, vec![1, -1], &[1]).unwrap();

    assert_eq!(
        successive_shortest_paths(&mut network),
        Err(Error::Infeasible(0))
    );
}
