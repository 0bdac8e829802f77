pub mod algorithms;
pub mod core;
pub mod error;
pub mod graph;
pub mod io;
pub mod storage;
pub mod traits;

pub use algorithms::*;
pub use self::core::*;
pub use error::*;
pub use graph::*;
pub use io::*;
pub use storage::*;
pub use traits::*;
