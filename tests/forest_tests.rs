use sparseflow::forest::NO_EDGE;
use sparseflow::{CsrGraph, Forest, Graph, ShortestPathForest};

fn diamond_graph() -> CsrGraph {
    // 0 -> 1 -> 3, 0 -> 2 -> 3
    CsrGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
}

#[test]
fn test_new_forest_is_all_singleton_roots() {
    let graph = diamond_graph();
    let forest = Forest::new(&graph);

    for vertex in graph.vertices() {
        assert!(forest.is_root_vertex(vertex));
        assert_eq!(forest.predecessor_vertex(vertex), vertex);
        assert_eq!(forest.predecessor_edge(vertex), NO_EDGE);
        assert_eq!(forest.predecessors(vertex).count(), 0);
    }
}

#[test]
fn test_custom_edge_fill() {
    let graph = diamond_graph();
    let forest = Forest::with_edge_fill(&graph, 42);

    assert_eq!(forest.predecessor_edge(0), 42);
}

#[test]
fn test_set_predecessor_and_walk() {
    let graph = diamond_graph();
    let mut forest = Forest::new(&graph);

    // Build the path 0 -e0-> 1 -e2-> 3.
    forest.set_predecessor(1, 0, 0);
    forest.set_predecessor(3, 1, 2);

    assert!(forest.is_root_vertex(0));
    assert!(!forest.is_root_vertex(1));
    assert!(!forest.is_root_vertex(3));

    assert_eq!(forest.predecessor(3), (1, 2));
    assert_eq!(forest.predecessor(1), (0, 0));

    assert_eq!(
        forest.predecessors(3).collect::<Vec<_>>(),
        vec![(1, 2), (0, 0)],
        "walk yields (tail, edge) pairs up to but excluding the root"
    );
    assert_eq!(forest.predecessors(0).count(), 0, "roots have empty walks");
}

#[test]
fn test_make_root_vertex() {
    let graph = diamond_graph();
    let mut forest = Forest::new(&graph);

    forest.set_predecessor(1, 0, 0);
    assert!(!forest.is_root_vertex(1));

    forest.make_root_vertex(1);
    assert!(forest.is_root_vertex(1));
    assert_eq!(forest.predecessor_edge(1), NO_EDGE);
}

#[test]
fn test_reset_restores_singleton_trees() {
    let graph = diamond_graph();
    let mut forest = Forest::new(&graph);

    forest.set_predecessor(1, 0, 0);
    forest.set_predecessor(3, 1, 2);
    forest.reset();

    for vertex in graph.vertices() {
        assert!(forest.is_root_vertex(vertex));
        assert_eq!(forest.predecessor_edge(vertex), NO_EDGE);
    }
}

#[test]
fn test_shortest_path_forest_initial_state() {
    let graph = diamond_graph();
    let paths: ShortestPathForest<CsrGraph, u32> = ShortestPathForest::new(&graph);

    for vertex in graph.vertices() {
        assert!(!paths.has_reached_vertex(vertex));
        assert!(!paths.has_visited_vertex(vertex));
        assert_eq!(paths.distance_to_vertex(vertex), u32::MAX);
        assert!(paths.is_root_vertex(vertex));
    }
    assert_eq!(paths.reached_vertices().count(), 0);
    assert_eq!(paths.visited_vertices().count(), 0);
}

#[test]
fn test_label_progression() {
    let graph = diamond_graph();
    let mut paths: ShortestPathForest<CsrGraph, u32> = ShortestPathForest::new(&graph);

    paths.label_vertex_reached(1);
    assert!(paths.has_reached_vertex(1));
    assert!(!paths.has_visited_vertex(1));

    // Reaching an already-reached vertex is idempotent.
    paths.label_vertex_reached(1);
    assert!(paths.has_reached_vertex(1));

    paths.label_vertex_visited(1);
    assert!(paths.has_reached_vertex(1), "visited vertices count as reached");
    assert!(paths.has_visited_vertex(1));
}

#[test]
fn test_reached_and_visited_views() {
    let graph = diamond_graph();
    let mut paths: ShortestPathForest<CsrGraph, u32> = ShortestPathForest::new(&graph);

    paths.label_vertex_reached(0);
    paths.label_vertex_reached(2);
    paths.label_vertex_visited(0);

    assert_eq!(paths.reached_vertices().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(paths.visited_vertices().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_distances_round_trip() {
    let graph = diamond_graph();
    let mut paths: ShortestPathForest<CsrGraph, u32> = ShortestPathForest::new(&graph);

    paths.set_distance_to_vertex(2, 17);
    assert_eq!(paths.distance_to_vertex(2), 17);

    paths.reset();
    assert_eq!(paths.distance_to_vertex(2), u32::MAX);
    assert_eq!(paths.reached_vertices().count(), 0);
}

#[test]
#[should_panic(expected = "already been visited")]
fn test_reaching_a_visited_vertex_panics() {
    let graph = diamond_graph();
    let mut paths: ShortestPathForest<CsrGraph, u32> = ShortestPathForest::new(&graph);

    paths.label_vertex_reached(1);
    paths.label_vertex_visited(1);
    paths.label_vertex_reached(1);
}
