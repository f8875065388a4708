//! Residual networks for minimum-cost-flow computation.

pub mod capacity;
pub mod residual;
pub mod successive_shortest_paths;

pub use capacity::{CapacityPolicy, Uncapacitated, UnitCapacity};
pub use residual::{ResidualGraph, ResidualNetwork, UncapacitatedNetwork, UnitCapacityNetwork};
pub use successive_shortest_paths::successive_shortest_paths;
