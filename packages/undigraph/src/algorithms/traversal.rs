//! Breadth-first and depth-first traversal trees.

use std::collections::VecDeque;

use tracing::debug;

use crate::core::{NodeId, Vertex};
use crate::error::Result;
use crate::traits::GraphBase;

/// Parent/level assignment produced by a traversal from `root`.
///
/// Unreached vertices keep `None` for both parent and level.
#[derive(Clone, Debug, PartialEq)]
pub struct TraversalTree {
    pub root: NodeId,
    pub parents: Vec<Option<NodeId>>,
    pub levels: Vec<Option<usize>>,
    /// Vertices in discovery order, starting with the root.
    pub order: Vec<NodeId>,
}

impl TraversalTree {
    fn new(n: usize, root: NodeId) -> Self {
        let mut levels = vec![None; n];
        levels[root.0] = Some(0);
        Self {
            root,
            parents: vec![None; n],
            levels,
            order: vec![root],
        }
    }

    fn discover(&mut self, v: NodeId, parent: NodeId) {
        self.parents[v.0] = Some(parent);
        self.levels[v.0] = self.levels[parent.0].map(|l| l + 1);
        self.order.push(v);
    }

    pub fn parent(&self, v: NodeId) -> Option<NodeId> {
        self.parents[v.0]
    }

    pub fn level(&self, v: NodeId) -> Option<usize> {
        self.levels[v.0]
    }

    pub fn is_reached(&self, v: NodeId) -> bool {
        self.levels[v.0].is_some()
    }

    /// `(vertex, parent, level)` for every vertex in id order, 1-based.
    pub fn entries(&self) -> impl Iterator<Item = (Vertex, Option<Vertex>, Option<usize>)> + '_ {
        self.parents
            .iter()
            .zip(&self.levels)
            .enumerate()
            .map(|(i, (p, l))| (NodeId(i).to_vertex(), p.map(NodeId::to_vertex), *l))
    }
}

/// Level-order walk from `root`; `on_discover(v, parent)` runs once per newly
/// reached vertex. The root itself is marked visited but not reported.
pub(crate) fn breadth_first<G, F>(graph: &G, root: NodeId, visited: &mut [bool], mut on_discover: F)
where
    G: GraphBase + ?Sized,
    F: FnMut(NodeId, NodeId),
{
    let mut queue = VecDeque::new();
    visited[root.0] = true;
    queue.push_back(root);

    while let Some(u) = queue.pop_front() {
        for (v, _) in graph.neighbors(u) {
            if !visited[v.0] {
                visited[v.0] = true;
                on_discover(v, u);
                queue.push_back(v);
            }
        }
    }
}

/// Breadth-first tree from the 1-based `root`.
pub fn bfs<G>(graph: &G, root: Vertex) -> Result<TraversalTree>
where
    G: GraphBase + ?Sized,
{
    let n = graph.order();
    let root = root.to_node(n)?;
    let mut tree = TraversalTree::new(n, root);
    let mut visited = vec![false; n];

    breadth_first(graph, root, &mut visited, |v, parent| tree.discover(v, parent));

    debug!(root = root.0 + 1, reached = tree.order.len(), "bfs");
    Ok(tree)
}

/// Depth-first (pre-order) tree from the 1-based `root`.
///
/// Uses an explicit stack of neighbor iterators, so each vertex resumes its
/// neighbor scan exactly where the recursive formulation would.
pub fn dfs<G>(graph: &G, root: Vertex) -> Result<TraversalTree>
where
    G: GraphBase + ?Sized,
{
    let n = graph.order();
    let root = root.to_node(n)?;
    let mut tree = TraversalTree::new(n, root);
    let mut visited = vec![false; n];

    visited[root.0] = true;
    let mut stack = vec![(root, graph.neighbors(root))];

    while let Some((u, neighbors)) = stack.last_mut() {
        let u = *u;
        match neighbors.find(|&(v, _)| !visited[v.0]) {
            Some((v, _)) => {
                visited[v.0] = true;
                tree.discover(v, u);
                stack.push((v, graph.neighbors(v)));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(root = root.0 + 1, reached = tree.order.len(), "dfs");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Representation;
    use crate::error::GraphError;
    use crate::graph::UndirectedGraph;

    const BOTH: [Representation; 2] = [Representation::Dense, Representation::Sparse];

    fn path4(r: Representation) -> UndirectedGraph {
        UndirectedGraph::from_edges(4, r, false, [(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).unwrap()
    }

    #[test]
    fn bfs_on_path() {
        for r in BOTH {
            let tree = bfs(&path4(r), Vertex(1)).unwrap();

            assert_eq!(tree.levels, vec![Some(0), Some(1), Some(2), Some(3)]);
            assert_eq!(
                tree.parents,
                vec![None, Some(NodeId(0)), Some(NodeId(1)), Some(NodeId(2))]
            );
        }
    }

    #[test]
    fn bfs_levels_are_hop_distances() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        // (ids shifted by one)
        let edges = [(2, 3), (2, 1), (5, 4), (1, 6), (3, 5), (6, 5)];
        for r in BOTH {
            let g = UndirectedGraph::from_edges(6, r, false, edges.map(|(u, v)| (u, v, 1.0)))
                .unwrap();
            let tree = bfs(&g, Vertex(2)).unwrap();

            assert_eq!(
                tree.levels,
                vec![Some(1), Some(0), Some(1), Some(3), Some(2), Some(2)]
            );
            assert_eq!(tree.order[0], NodeId(1));
            assert_eq!(tree.order.len(), 6);
        }
    }

    #[test]
    fn dfs_goes_deep_first() {
        // star-ish: 1-2, 1-3, 2-4
        for r in BOTH {
            let g =
                UndirectedGraph::from_edges(4, r, false, [(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0)])
                    .unwrap();
            let tree = dfs(&g, Vertex(1)).unwrap();

            assert_eq!(tree.order, vec![NodeId(0), NodeId(1), NodeId(3), NodeId(2)]);
            assert_eq!(tree.level(NodeId(3)), Some(2));
            assert_eq!(tree.parent(NodeId(3)), Some(NodeId(1)));
            assert_eq!(tree.parent(NodeId(2)), Some(NodeId(0)));
        }
    }

    #[test]
    fn dfs_and_bfs_disagree_on_cycle() {
        // triangle 1-2-3
        let g = UndirectedGraph::from_edges(
            3,
            Representation::Sparse,
            false,
            [(1, 2, 1.0), (2, 3, 1.0), (1, 3, 1.0)],
        )
        .unwrap();

        let b = bfs(&g, Vertex(1)).unwrap();
        let d = dfs(&g, Vertex(1)).unwrap();
        assert_eq!(b.level(NodeId(2)), Some(1));
        assert_eq!(d.level(NodeId(2)), Some(2));
        assert_eq!(d.parent(NodeId(2)), Some(NodeId(1)));
    }

    #[test]
    fn dfs_survives_long_chains() {
        let n = 200_000;
        let g = UndirectedGraph::from_edges(
            n,
            Representation::Sparse,
            false,
            (1..n).map(|i| (i, i + 1, 1.0)),
        )
        .unwrap();

        let tree = dfs(&g, Vertex(1)).unwrap();
        assert_eq!(tree.level(NodeId(n - 1)), Some(n - 1));
    }

    #[test]
    fn unreached_vertices() {
        for r in BOTH {
            let g = UndirectedGraph::from_edges(4, r, false, [(1, 2, 1.0)]).unwrap();
            for tree in [bfs(&g, Vertex(2)).unwrap(), dfs(&g, Vertex(2)).unwrap()] {
                assert_eq!(tree.parent(NodeId(1)), None);
                assert_eq!(tree.level(NodeId(1)), Some(0));
                assert!(!tree.is_reached(NodeId(2)));
                assert!(!tree.is_reached(NodeId(3)));
                assert_eq!(tree.parent(NodeId(3)), None);

                let entries: Vec<_> = tree.entries().collect();
                assert_eq!(entries[0], (Vertex(1), Some(Vertex(2)), Some(1)));
                assert_eq!(entries[3], (Vertex(4), None, None));
            }
        }
    }

    #[test]
    fn root_out_of_range() {
        let g = path4(Representation::Dense);
        assert!(matches!(
            bfs(&g, Vertex(0)),
            Err(GraphError::VertexOutOfRange { vertex: 0, order: 4 })
        ));
        assert!(matches!(
            dfs(&g, Vertex(5)),
            Err(GraphError::VertexOutOfRange { vertex: 5, order: 4 })
        ));
    }
}
