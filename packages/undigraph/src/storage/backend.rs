//! Backend: runtime-selected storage. Exactly one representation is live per
//! instance; every call is forwarded to it.

use crate::core::{NodeId, Representation};
use crate::error::Result;
use crate::storage::{AdjacencyList, AdjacencyMatrix};
use crate::traits::{GraphBase, MutableStorage, StorageRepresentation};

#[derive(Clone, Debug)]
pub enum Backend {
    Dense(AdjacencyMatrix),
    Sparse(AdjacencyList),
}

impl Backend {
    pub fn new(order: usize, representation: Representation) -> Result<Self> {
        Ok(match representation {
            Representation::Dense => Backend::Dense(AdjacencyMatrix::new(order)?),
            Representation::Sparse => Backend::Sparse(AdjacencyList::new(order)),
        })
    }

    pub fn representation(&self) -> Representation {
        match self {
            Backend::Dense(_) => Representation::Dense,
            Backend::Sparse(_) => Representation::Sparse,
        }
    }
}

impl StorageRepresentation for Backend {
    fn with_order(order: usize) -> Result<Self> {
        Self::new(order, Representation::default())
    }
}

impl GraphBase for Backend {
    fn order(&self) -> usize {
        match self {
            Backend::Dense(s) => s.order(),
            Backend::Sparse(s) => s.order(),
        }
    }
    fn size(&self) -> usize {
        match self {
            Backend::Dense(s) => s.size(),
            Backend::Sparse(s) => s.size(),
        }
    }

    fn degree(&self, v: NodeId) -> usize {
        match self {
            Backend::Dense(s) => s.degree(v),
            Backend::Sparse(s) => s.degree(v),
        }
    }

    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_> {
        match self {
            Backend::Dense(s) => s.neighbors(v),
            Backend::Sparse(s) => s.neighbors(v),
        }
    }

    fn weight_between(&self, u: NodeId, v: NodeId) -> Option<f64> {
        match self {
            Backend::Dense(s) => s.weight_between(u, v),
            Backend::Sparse(s) => s.weight_between(u, v),
        }
    }
}

impl MutableStorage for Backend {
    fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> bool {
        match self {
            Backend::Dense(s) => s.add_edge(u, v, weight),
            Backend::Sparse(s) => s.add_edge(u, v, weight),
        }
    }
}
