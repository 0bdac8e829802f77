use tracing::debug;

use crate::algorithms::traversal::breadth_first;
use crate::core::NodeId;
use crate::traits::GraphBase;

/// A connected component; members are in the order its BFS discovered them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub members: Vec<NodeId>,
}

impl Component {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// All components of a graph, largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Components {
    pub components: Vec<Component>,
}

impl Components {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Component index per vertex.
    pub fn labels(&self, order: usize) -> Vec<usize> {
        let mut labels = vec![usize::MAX; order];
        for (i, c) in self.components.iter().enumerate() {
            for v in &c.members {
                labels[v.0] = i;
            }
        }
        labels
    }
}

/// Partition the (undirected) graph into its connected components.
///
/// Every vertex lands in exactly one component. Components are ordered by
/// descending size; equal sizes keep the order in which their lowest vertex
/// was reached.
pub fn connected_components<G>(graph: &G) -> Components
where
    G: GraphBase + ?Sized,
{
    let n = graph.order();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in graph.node_ids() {
        if visited[start.0] {
            continue;
        }
        let mut members = vec![start];
        breadth_first(graph, start, &mut visited, |v, _| members.push(v));
        components.push(Component { members });
    }

    components.sort_by(|a, b| b.size().cmp(&a.size()));

    debug!(components = components.len(), "connected components");
    Components { components }
}
