//! UndirectedGraph wraps a storage representation `S`. It validates every
//! insertion (bounds, self-loops, weights), applies the weighting mode and
//! delegates storage and queries to `S`.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, trace};

use crate::core::{NodeId, Representation, UNIT_WEIGHT, Vertex};
use crate::error::{GraphError, Result};
use crate::io::edge_list::{EdgeList, EdgeListReader};
use crate::storage::Backend;
use crate::traits::{GraphBase, MutableStorage, StorageRepresentation};

#[derive(Clone, Debug)]
pub struct UndirectedGraph<S = Backend>
where
    S: StorageRepresentation,
{
    pub storage: S,
    weighted: bool,
}

impl UndirectedGraph<Backend> {
    /// Graph with `order` vertices on the requested backend.
    pub fn with_representation(
        order: usize,
        representation: Representation,
        weighted: bool,
    ) -> Result<Self> {
        if order == 0 {
            return Err(GraphError::Configuration { order });
        }
        let storage = Backend::new(order, representation)?;
        debug!(order, %representation, weighted, "graph created");
        Ok(Self { storage, weighted })
    }

    /// Builds a graph from 1-based `(u, v, weight)` triples.
    pub fn from_edges<EI>(
        order: usize,
        representation: Representation,
        weighted: bool,
        edges_iter: EI,
    ) -> Result<Self>
    where
        EI: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::with_representation(order, representation, weighted)?;
        for (u, v, w) in edges_iter {
            graph.add_edge_between(Vertex(u), Vertex(v), Some(w))?;
        }
        Ok(graph)
    }

    pub fn representation(&self) -> Representation {
        self.storage.representation()
    }
}

impl<S> UndirectedGraph<S>
where
    S: MutableStorage,
{
    pub fn new(order: usize, weighted: bool) -> Result<Self> {
        if order == 0 {
            return Err(GraphError::Configuration { order });
        }
        Ok(Self {
            storage: S::with_order(order)?,
            weighted,
        })
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Weight that would be stored for `{u, v}`, or the reason the edge is rejected.
    fn check_edge(&self, u: NodeId, v: NodeId, weight: f64) -> Result<f64> {
        let order = self.order();
        for x in [u, v] {
            if x.0 >= order {
                return Err(GraphError::VertexOutOfRange {
                    vertex: x.0 + 1,
                    order,
                });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u.0 + 1 });
        }
        if !self.weighted {
            return Ok(UNIT_WEIGHT);
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }
        Ok(weight)
    }

    /// Inserts `{u, v}`. Unweighted graphs store `1.0` whatever `weight` is.
    ///
    /// Returns `Ok(false)` when the pair already exists; the stored weight is
    /// left untouched in that case.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<bool> {
        let weight = self.check_edge(u, v, weight)?;
        let added = self.storage.add_edge(u, v, weight);
        trace!(u = u.0, v = v.0, weight, added, "add_edge");
        Ok(added)
    }

    /// 1-based form of [`UndirectedGraph::add_edge`]; a missing weight means `1.0`.
    pub fn add_edge_between(&mut self, u: Vertex, v: Vertex, weight: Option<f64>) -> Result<bool> {
        let order = self.order();
        let u = u.to_node(order)?;
        let v = v.to_node(order)?;
        self.add_edge(u, v, weight.unwrap_or(UNIT_WEIGHT))
    }

    /// Inserts every edge of `list`. Nothing is inserted unless the declared
    /// vertex count matches and every edge is acceptable.
    pub fn load(&mut self, list: EdgeList) -> Result<usize> {
        let order = self.order();
        if list.order != order {
            return Err(GraphError::LoadMismatch {
                declared: list.order,
                expected: order,
            });
        }

        let mut checked = Vec::with_capacity(list.edges.len());
        for edge in list.edges {
            let u = edge.u.to_node(order)?;
            let v = edge.v.to_node(order)?;
            let w = self.check_edge(u, v, edge.weight.unwrap_or(UNIT_WEIGHT))?;
            checked.push((u, v, w));
        }

        let mut added = 0;
        for (u, v, w) in checked {
            if self.storage.add_edge(u, v, w) {
                added += 1;
            }
        }
        debug!(added, size = self.size(), "edge list loaded");
        Ok(added)
    }

    pub fn load_edge_list<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let list = EdgeListReader::new().weighted(self.weighted).read(reader)?;
        self.load(list)
    }

    pub fn load_edge_list_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let list = EdgeListReader::new()
            .weighted(self.weighted)
            .read_file(path)?;
        self.load(list)
    }
}

impl<S> UndirectedGraph<S>
where
    S: StorageRepresentation,
{
    /// Every unordered edge once, as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.node_ids().flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    /// Same logical graph rebuilt on another backend.
    pub fn to_representation(
        &self,
        representation: Representation,
    ) -> Result<UndirectedGraph<Backend>> {
        let mut storage = Backend::new(self.order(), representation)?;
        for (u, v, w) in self.edges() {
            storage.add_edge(u, v, w);
        }
        Ok(UndirectedGraph {
            storage,
            weighted: self.weighted,
        })
    }
}

/// Implement GraphBase by delegating to storage
impl<S> GraphBase for UndirectedGraph<S>
where
    S: StorageRepresentation,
{
    fn order(&self) -> usize {
        self.storage.order()
    }
    fn size(&self) -> usize {
        self.storage.size()
    }

    fn degree(&self, v: NodeId) -> usize {
        self.storage.degree(v)
    }

    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_> {
        self.storage.neighbors(v)
    }

    fn weight_between(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.storage.weight_between(u, v)
    }
}
