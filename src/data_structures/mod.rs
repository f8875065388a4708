pub mod bucket_ring;
pub mod priority_queue;

pub use bucket_ring::BucketRing;
pub use priority_queue::MinHeap;
