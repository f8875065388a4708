//! Edge-list generators for tests and benchmarks.

use rand::Rng;

use crate::graph::EdgeList;

/// Generates a random directed graph with `num_vertices` vertices and
/// `num_edges` uniformly sampled edges. Parallel edges and self-loops may
/// occur.
pub fn random_edge_list<R: Rng>(num_vertices: usize, num_edges: usize, rng: &mut R) -> EdgeList {
    assert!(num_vertices > 0, "graph must have at least one vertex");

    let mut edge_list = EdgeList::with_capacity(num_edges);
    for _ in 0..num_edges {
        let tail = rng.gen_range(0..num_vertices);
        let head = rng.gen_range(0..num_vertices);
        edge_list.add_edge(tail, head);
    }
    edge_list
}

/// Generates a 4-connected `rows x cols` grid with an edge in each direction
/// between horizontally and vertically adjacent cells. Vertex ids are
/// row-major.
pub fn grid_edge_list(rows: usize, cols: usize) -> EdgeList {
    let mut edge_list = EdgeList::with_capacity(4 * rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let vertex = r * cols + c;
            if c + 1 < cols {
                edge_list.add_edge(vertex, vertex + 1);
                edge_list.add_edge(vertex + 1, vertex);
            }
            if r + 1 < rows {
                edge_list.add_edge(vertex, vertex + cols);
                edge_list.add_edge(vertex + cols, vertex);
            }
        }
    }
    edge_list
}

/// Generates one random cost in `0..=max_cost` per edge.
pub fn random_costs<R: Rng>(num_edges: usize, max_cost: u32, rng: &mut R) -> Vec<u32> {
    (0..num_edges).map(|_| rng.gen_range(0..=max_cost)).collect()
}
