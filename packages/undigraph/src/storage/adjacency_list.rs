//! AdjacencyList: one growable `(neighbor, weight)` list per vertex plus a
//! degree counter. Every edge is pushed in both directions, so neighbor order
//! is insertion order.

use crate::core::NodeId;
use crate::error::Result;
use crate::traits::{GraphBase, MutableStorage, StorageRepresentation};

#[derive(Clone, Debug)]
pub struct AdjacencyList {
    pub m: usize,
    pub adj: Vec<Vec<(NodeId, f64)>>,
    pub degrees: Vec<usize>,
}

impl AdjacencyList {
    pub fn new(n: usize) -> Self {
        Self {
            m: 0,
            adj: vec![Vec::new(); n],
            degrees: vec![0; n],
        }
    }

    /// Builds a list from `(u, v, weight)` triples, skipping repeated pairs.
    pub fn from_edge_list<EI>(n: usize, edges_iter: EI) -> Self
    where
        EI: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut al = Self::new(n);
        for (u, v, w) in edges_iter {
            al.add_edge(u, v, w);
        }
        al
    }

    fn position(&self, u: NodeId, v: NodeId) -> Option<usize> {
        self.adj[u.0].iter().position(|&(x, _)| x == v)
    }
}

impl StorageRepresentation for AdjacencyList {
    fn with_order(order: usize) -> Result<Self> {
        Ok(Self::new(order))
    }
}

impl GraphBase for AdjacencyList {
    fn order(&self) -> usize {
        self.adj.len()
    }
    fn size(&self) -> usize {
        self.m
    }

    fn degree(&self, v: NodeId) -> usize {
        self.degrees[v.0]
    }

    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_> {
        match self.adj.get(v.0) {
            Some(list) => Box::new(list.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn weight_between(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.position(u, v).map(|i| self.adj[u.0][i].1)
    }
}

impl MutableStorage for AdjacencyList {
    fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> bool {
        if self.position(u, v).is_some() {
            return false;
        }
        self.adj[u.0].push((v, weight));
        self.degrees[u.0] += 1;
        self.adj[v.0].push((u, weight));
        self.degrees[v.0] += 1;
        self.m += 1;
        true
    }
}
