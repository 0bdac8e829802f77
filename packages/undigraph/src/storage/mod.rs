pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod backend;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use backend::Backend;
