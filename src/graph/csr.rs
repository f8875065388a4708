use crate::graph::{EdgeList, Graph};
use crate::{Error, Result};

/// A compressed sparse row (CSR) directed graph.
///
/// Edges are stored contiguously grouped by tail vertex, indexed by a
/// per-vertex offsets array: edge `j` for `j` in
/// `offsets[v]..offsets[v + 1]` has tail `v` and head `heads[j]`. The
/// topology cannot be modified after construction. Parallel edges and
/// self-loops are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    /// `offsets[v + 1] - offsets[v]` is the out-degree of vertex `v`.
    offsets: Vec<usize>,
    /// Head vertex of each edge, grouped by tail.
    heads: Vec<usize>,
}

impl CsrGraph {
    /// Creates an empty graph with no vertices or edges.
    pub fn new() -> Self {
        CsrGraph {
            offsets: vec![0],
            heads: Vec::new(),
        }
    }

    /// Builds a graph with `num_vertices` vertices from a sequence of
    /// `(tail, head)` pairs.
    ///
    /// Tails need not be sorted: the builder groups edges by tail with a
    /// stable counting sort, so edge ids preserve insertion order within each
    /// tail group and groups are ordered by ascending tail.
    ///
    /// Returns [`Error::InvalidVertex`] if any tail or head is out of range.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        for &(tail, head) in edges {
            if tail >= num_vertices {
                return Err(Error::InvalidVertex(tail));
            }
            if head >= num_vertices {
                return Err(Error::InvalidVertex(head));
            }
        }
        Ok(Self::build(num_vertices, edges))
    }

    /// Builds a graph from an edge list, inferring the vertex count as one
    /// past the largest vertex id mentioned by any edge.
    ///
    /// Vertices below the largest id that appear in no edge are still
    /// materialized (as isolated vertices).
    pub fn from_edge_list(edge_list: &EdgeList) -> Self {
        let num_vertices = edge_list.max_vertex_id().map_or(0, |max| max + 1);
        Self::build(num_vertices, edge_list.as_slice())
    }

    /// Counting-sort construction. All edge endpoints must be `< num_vertices`.
    fn build(num_vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut offsets = vec![0usize; num_vertices + 1];
        for &(tail, _) in edges {
            offsets[tail + 1] += 1;
        }
        for v in 0..num_vertices {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor: Vec<usize> = offsets[..num_vertices].to_vec();
        let mut heads = vec![0usize; edges.len()];
        for &(tail, head) in edges {
            heads[cursor[tail]] = head;
            cursor[tail] += 1;
        }

        debug_assert_eq!(offsets[num_vertices], heads.len());
        CsrGraph { offsets, heads }
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        CsrGraph::new()
    }
}

impl From<&EdgeList> for CsrGraph {
    fn from(edge_list: &EdgeList) -> Self {
        CsrGraph::from_edge_list(edge_list)
    }
}

impl Graph for CsrGraph {
    type OutgoingEdges<'a> =
        std::iter::Zip<std::ops::Range<usize>, std::iter::Copied<std::slice::Iter<'a, usize>>>
    where
        Self: 'a;

    fn num_vertices(&self) -> usize {
        debug_assert!(!self.offsets.is_empty());
        self.offsets.len() - 1
    }

    fn num_edges(&self) -> usize {
        self.heads.len()
    }

    fn out_degree(&self, vertex: usize) -> usize {
        assert!(self.contains_vertex(vertex), "vertex {vertex} out of range");
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    fn outgoing_edges(&self, vertex: usize) -> Self::OutgoingEdges<'_> {
        assert!(self.contains_vertex(vertex), "vertex {vertex} out of range");
        let lo = self.offsets[vertex];
        let hi = self.offsets[vertex + 1];
        (lo..hi).zip(self.heads[lo..hi].iter().copied())
    }
}
