//! core small types

use std::fmt::{self, Display};

use crate::error::{GraphError, Result};

/// Weight recorded for absent edges in dense storage and for unreachable distances.
pub const INFINITY: f64 = f64::INFINITY;

/// Weight stored for every edge of an unweighted graph.
pub const UNIT_WEIGHT: f64 = 1.0;

/// Zero-based internal vertex index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// One-based id as seen by callers and reports.
    pub fn to_vertex(self) -> Vertex {
        Vertex(self.0 + 1)
    }
}

/// One-based external vertex id, as used by edge lists, roots and reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(pub usize);

impl Vertex {
    /// Converts to an internal index, rejecting ids outside `1..=order`.
    pub fn to_node(self, order: usize) -> Result<NodeId> {
        if self.0 == 0 || self.0 > order {
            return Err(GraphError::VertexOutOfRange {
                vertex: self.0,
                order,
            });
        }
        Ok(NodeId(self.0 - 1))
    }
}

impl From<NodeId> for Vertex {
    fn from(id: NodeId) -> Self {
        id.to_vertex()
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage strategy, chosen once at construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Representation {
    /// `n x n` adjacency and weight matrices.
    Dense,
    /// Per-vertex neighbor lists with a maintained degree counter.
    #[default]
    Sparse,
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}
