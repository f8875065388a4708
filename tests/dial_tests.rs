use rand::rngs::StdRng;
use rand::SeedableRng;
use sparseflow::graph::generators::{random_costs, random_edge_list};
use sparseflow::{CsrGraph, Dial, Dijkstra, Graph};

/// 4 vertices, edges (0,1) w=1, (0,2) w=4, (1,2) w=2, (2,3) w=1.
fn tiny_dag() -> (CsrGraph, Vec<u32>) {
    let graph = CsrGraph::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
    let weights = vec![1, 4, 2, 1];
    (graph, weights)
}

#[test]
fn test_tiny_dag_matches_expected_distances() {
    let (graph, weights) = tiny_dag();
    let mut dial = Dial::new(&graph, 5);

    dial.add_source(0);
    dial.run(|edge| weights[edge]);

    let distances: Vec<u32> = graph.vertices().map(|v| dial.distance_to_vertex(v)).collect();
    assert_eq!(distances, vec![0, 1, 3, 4]);

    assert_eq!(dial.predecessor(1), (0, 0));
    assert_eq!(dial.predecessor(2), (1, 2));
    assert_eq!(dial.predecessor(3), (2, 3));
}

#[test]
fn test_matches_dijkstra_on_tiny_dag() {
    let (graph, weights) = tiny_dag();

    let mut dijkstra = Dijkstra::new(&graph);
    dijkstra.add_source(0);
    dijkstra.run(|edge| weights[edge]);

    let mut dial = Dial::new(&graph, 5);
    dial.add_source(0);
    dial.run(|edge| weights[edge]);

    for vertex in graph.vertices() {
        assert_eq!(
            dial.distance_to_vertex(vertex),
            dijkstra.distance_to_vertex(vertex)
        );
    }
}

#[test]
fn test_matches_dijkstra_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(13);

    for trial in 0..10 {
        let edge_list = random_edge_list(40, 200, &mut rng);
        let graph = CsrGraph::from_edge_list(&edge_list);
        let max_weight = 9;
        let weights = random_costs(graph.num_edges(), max_weight, &mut rng);

        let mut dijkstra = Dijkstra::new(&graph);
        dijkstra.add_source(0);
        dijkstra.run(|edge| weights[edge]);

        let mut dial = Dial::new(&graph, max_weight as usize + 1);
        dial.add_source(0);
        dial.run(|edge| weights[edge]);

        for vertex in graph.vertices() {
            assert_eq!(
                dial.distance_to_vertex(vertex),
                dijkstra.distance_to_vertex(vertex),
                "distance mismatch at vertex {vertex} in trial {trial}"
            );
        }
    }
}

#[test]
fn test_visit_order_is_nondecreasing_with_ring_wraparound() {
    // Distances exceed the bucket count, forcing the ring to wrap.
    let graph = CsrGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    let weights = [2u32, 2, 2, 2];
    let mut dial = Dial::new(&graph, 3);
    dial.add_source(0);

    let mut previous = 0u32;
    while !dial.done() {
        let (tail, distance) = dial.pop_next_unvisited_vertex();
        dial.visit_vertex(tail, distance);
        assert!(distance >= previous, "visit order regressed");
        previous = distance;
        for (edge, head) in graph.outgoing_edges(tail) {
            dial.relax_edge(edge, tail, head, distance + weights[edge]);
        }
    }

    assert_eq!(dial.distance_to_vertex(4), 8);
}

#[test]
fn test_zero_buckets_is_done_without_mutation() {
    let (graph, _) = tiny_dag();
    let mut dial: Dial<CsrGraph, u32> = Dial::new(&graph, 0);

    assert_eq!(dial.num_buckets(), 0);
    assert!(dial.done());
    assert_eq!(dial.current_bucket_id(), 0);
    assert_eq!(dial.reached_vertices().count(), 0);
}

#[test]
fn test_empty_source_set_is_done_immediately() {
    let (graph, _) = tiny_dag();
    let mut dial: Dial<CsrGraph, u32> = Dial::new(&graph, 5);

    assert!(dial.done());
}

#[test]
fn test_bucket_assignment_is_distance_mod_ring_length() {
    let (graph, _) = tiny_dag();
    let dial: Dial<CsrGraph, u32> = Dial::new(&graph, 5);

    assert_eq!(dial.bucket_id(0), 0);
    assert_eq!(dial.bucket_id(4), 4);
    assert_eq!(dial.bucket_id(5), 0);
    assert_eq!(dial.bucket_id(12), 2);
}

#[test]
fn test_reset_then_rerun_reproduces_results() {
    let (graph, weights) = tiny_dag();
    let mut dial = Dial::new(&graph, 5);

    dial.add_source(0);
    dial.run(|edge| weights[edge]);
    let distances: Vec<u32> = graph.vertices().map(|v| dial.distance_to_vertex(v)).collect();
    let predecessors: Vec<(usize, usize)> =
        graph.vertices().map(|v| dial.predecessor(v)).collect();

    dial.reset();
    assert!(dial.done());
    assert_eq!(dial.current_bucket_id(), 0);
    for vertex in graph.vertices() {
        assert!(!dial.has_reached_vertex(vertex));
        assert_eq!(dial.distance_to_vertex(vertex), u32::MAX);
    }

    dial.add_source(0);
    dial.run(|edge| weights[edge]);
    let distances_again: Vec<u32> =
        graph.vertices().map(|v| dial.distance_to_vertex(v)).collect();
    let predecessors_again: Vec<(usize, usize)> =
        graph.vertices().map(|v| dial.predecessor(v)).collect();

    assert_eq!(distances, distances_again);
    assert_eq!(predecessors, predecessors_again);
}
