pub mod connectivity;
pub mod dijkstra;
pub mod statistics;
pub mod traversal;

pub use connectivity::*;
pub use dijkstra::*;
pub use statistics::*;
pub use traversal::*;
