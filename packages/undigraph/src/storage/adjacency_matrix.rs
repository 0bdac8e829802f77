//! Dense adjacency matrix stored as two flat `n * n` vectors: a presence map and
//! a weight map. Absent edges carry an infinite weight. Both maps are kept
//! symmetric, so `row(u)` alone describes the neighborhood of `u`.

use crate::core::{INFINITY, NodeId, Representation};
use crate::error::{GraphError, Result};
use crate::traits::{GraphBase, MutableStorage, StorageRepresentation};

#[derive(Clone, Debug)]
pub struct AdjacencyMatrix {
    pub n: usize,
    pub m: usize,
    pub adjacent: Vec<bool>,
    pub weights: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Fails with [`GraphError::Capacity`] when `n * n` cells cannot be
    /// addressed or allocated.
    pub fn new(n: usize) -> Result<Self> {
        let too_large = || GraphError::Capacity {
            order: n,
            representation: Representation::Dense,
        };
        let cells = n.checked_mul(n).ok_or_else(too_large)?;

        let mut adjacent = Vec::new();
        adjacent.try_reserve_exact(cells).map_err(|_| too_large())?;
        adjacent.resize(cells, false);
        let mut weights = Vec::new();
        weights.try_reserve_exact(cells).map_err(|_| too_large())?;
        weights.resize(cells, INFINITY);

        Ok(Self {
            n,
            m: 0,
            adjacent,
            weights,
        })
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.n + c
    }

    pub fn row(&self, u: NodeId) -> &[bool] {
        let start = u.0 * self.n;
        &self.adjacent[start..start + self.n]
    }

    pub fn weight_row(&self, u: NodeId) -> &[f64] {
        let start = u.0 * self.n;
        &self.weights[start..start + self.n]
    }
}

impl StorageRepresentation for AdjacencyMatrix {
    fn with_order(order: usize) -> Result<Self> {
        Self::new(order)
    }
}

impl GraphBase for AdjacencyMatrix {
    fn order(&self) -> usize {
        self.n
    }
    fn size(&self) -> usize {
        self.m
    }

    fn degree(&self, v: NodeId) -> usize {
        self.row(v).iter().filter(|&&a| a).count()
    }

    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_> {
        if v.0 >= self.n {
            return Box::new(std::iter::empty());
        }

        let neighbors = self
            .row(v)
            .iter()
            .zip(self.weight_row(v))
            .enumerate()
            .filter_map(|(u, (&adjacent, &w))| adjacent.then_some((NodeId(u), w)));
        Box::new(neighbors)
    }

    fn weight_between(&self, u: NodeId, v: NodeId) -> Option<f64> {
        let i = self.idx(u.0, v.0);
        self.adjacent[i].then(|| self.weights[i])
    }
}

impl MutableStorage for AdjacencyMatrix {
    fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> bool {
        let uv = self.idx(u.0, v.0);
        if self.adjacent[uv] {
            return false;
        }
        let vu = self.idx(v.0, u.0);
        self.adjacent[uv] = true;
        self.adjacent[vu] = true;
        self.weights[uv] = weight;
        self.weights[vu] = weight;
        self.m += 1;
        true
    }
}
