//! sparseflow - minimum-cost flow and shortest paths on sparse directed graphs
//!
//! The crate is built around three subsystems:
//!
//! - a compressed sparse-row digraph ([`CsrGraph`]) with dense vertex/edge
//!   indexing and cheap adjacency iteration,
//! - a shortest-path engine (a predecessor [`Forest`] plus per-vertex
//!   label/distance state) specialized by [`Dijkstra`] (binary heap) and
//!   [`Dial`] (ring of FIFO buckets, for small bounded integer weights),
//! - a [`ResidualNetwork`] that doubles each edge into a forward/reverse arc
//!   pair and tracks node excess, node potentials, arc costs and capacities;
//!   [`successive_shortest_paths`] computes a minimum-cost flow on top of it.
//!
//! Graphs are immutable once constructed. Searches own their state and can be
//! `reset()` for reuse without reallocation.

pub mod algorithm;
pub mod data_structures;
pub mod forest;
pub mod graph;
pub mod measure;
pub mod network;

pub use algorithm::{Dial, Dijkstra};
pub use forest::{Forest, Label, Predecessors, ShortestPathForest};
pub use graph::{CsrGraph, EdgeList, Graph};
pub use measure::{CostMeasure, DistanceMeasure, FlowMeasure, IntegralMeasure};
pub use network::{
    successive_shortest_paths, CapacityPolicy, ResidualGraph, ResidualNetwork, Uncapacitated,
    UnitCapacity,
};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid vertex id: {0}")]
    InvalidVertex(usize),

    #[error("invalid edge id: {0}")]
    InvalidEdge(usize),

    #[error("negative cost on edge {0}")]
    NegativeCost(usize),

    #[error("surplus array has length {actual}, expected one entry per vertex ({expected})")]
    SurplusLengthMismatch { actual: usize, expected: usize },

    #[error("cost array has length {actual}, expected one entry per edge ({expected})")]
    CostLengthMismatch { actual: usize, expected: usize },

    #[error("network is not balanced: node excesses do not sum to zero")]
    Unbalanced,

    #[error("no augmenting path from excess node {0} to any deficit node")]
    Infeasible(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
