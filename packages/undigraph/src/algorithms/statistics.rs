use indexmap::IndexMap;
use tracing::debug;

use crate::traits::GraphBase;

/// Vertex/edge counts and the empirical degree distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeStatistics {
    pub order: usize,
    pub size: usize,
    pub mean_degree: f64,
    /// degree -> number of vertices with that degree, ascending by degree.
    /// Degrees no vertex has are absent.
    pub distribution: IndexMap<usize, usize>,
}

impl DegreeStatistics {
    pub fn frequency(&self, degree: usize) -> usize {
        self.distribution.get(&degree).copied().unwrap_or(0)
    }

    pub fn max_degree(&self) -> Option<usize> {
        self.distribution.keys().last().copied()
    }
}

pub fn degree_statistics<G>(graph: &G) -> DegreeStatistics
where
    G: GraphBase + ?Sized,
{
    let order = graph.order();
    let mut distribution = IndexMap::new();
    let mut total = 0usize;

    for v in graph.node_ids() {
        let d = graph.degree(v);
        total += d;
        *distribution.entry(d).or_insert(0) += 1;
    }
    distribution.sort_keys();

    let mean_degree = if order == 0 {
        0.0
    } else {
        total as f64 / order as f64
    };

    debug!(order, size = graph.size(), mean_degree, "degree statistics");
    DegreeStatistics {
        order,
        size: graph.size(),
        mean_degree,
        distribution,
    }
}
