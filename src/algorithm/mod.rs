pub mod dial;
pub mod dijkstra;

pub use dial::{max_admissible_arc_length, Dial};
pub use dijkstra::Dijkstra;
