use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use crate::core::{INFINITY, NodeId, Vertex};
use crate::error::Result;
use crate::traits::GraphBase;

/// Min-heap entry ordered by tentative distance.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Single-source shortest-path tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub origin: NodeId,
    /// `INFINITY` for unreachable vertices.
    pub distances: Vec<f64>,
    pub predecessors: Vec<Option<NodeId>>,
}

/// Distance and route to a single destination.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    pub destination: Vertex,
    pub distance: f64,
    /// 1-based ids from origin to destination; empty when unreachable.
    pub path: Vec<Vertex>,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

impl ShortestPaths {
    pub fn distance_to(&self, v: NodeId) -> f64 {
        self.distances[v.0]
    }

    pub fn is_reachable(&self, v: NodeId) -> bool {
        self.distances[v.0].is_finite()
    }

    /// Walks predecessor links back from `target`; empty when unreachable.
    pub fn path_to(&self, target: NodeId) -> Vec<Vertex> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = target;
        while let Some(pred) = self.predecessors[current.0] {
            path.push(current.to_vertex());
            current = pred;
        }
        path.push(current.to_vertex());
        path.reverse();
        path
    }

    pub fn shortest_path_to(&self, target: NodeId) -> ShortestPath {
        ShortestPath {
            destination: target.to_vertex(),
            distance: self.distance_to(target),
            path: self.path_to(target),
        }
    }

    /// One entry per vertex, in id order.
    pub fn entries(&self) -> impl Iterator<Item = ShortestPath> + '_ {
        (0..self.distances.len()).map(|i| self.shortest_path_to(NodeId(i)))
    }
}

/// Lazy-deletion Dijkstra. Stops once `target` is popped, if given.
fn run<G>(graph: &G, source: NodeId, target: Option<NodeId>) -> ShortestPaths
where
    G: GraphBase + ?Sized,
{
    let n = graph.order();
    let mut distances = vec![INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut settled = 0usize;

    distances[source.0] = 0.0;
    heap.push(Reverse(HeapEntry {
        distance: 0.0,
        node: source,
    }));

    while let Some(Reverse(HeapEntry { distance, node: u })) = heap.pop() {
        if distance > distances[u.0] {
            continue;
        }
        settled += 1;
        if target == Some(u) {
            break;
        }

        for (v, w) in graph.neighbors(u) {
            let alt = distance + w;
            if alt < distances[v.0] {
                distances[v.0] = alt;
                predecessors[v.0] = Some(u);
                heap.push(Reverse(HeapEntry {
                    distance: alt,
                    node: v,
                }));
            }
        }
    }

    debug!(origin = source.0 + 1, settled, "dijkstra");
    ShortestPaths {
        origin: source,
        distances,
        predecessors,
    }
}

/// Shortest distances and paths from the 1-based `origin` to every vertex.
///
/// Edge weights must be non-negative; graphs built through
/// [`crate::graph::UndirectedGraph`] guarantee this.
pub fn dijkstra<G>(graph: &G, origin: Vertex) -> Result<ShortestPaths>
where
    G: GraphBase + ?Sized,
{
    let source = origin.to_node(graph.order())?;
    Ok(run(graph, source, None))
}

/// Shortest route between two 1-based vertices. The search ends as soon as
/// `destination` is settled.
pub fn shortest_path<G>(graph: &G, origin: Vertex, destination: Vertex) -> Result<ShortestPath>
where
    G: GraphBase + ?Sized,
{
    let n = graph.order();
    let source = origin.to_node(n)?;
    let target = destination.to_node(n)?;
    Ok(run(graph, source, Some(target)).shortest_path_to(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::traversal::bfs;
    use crate::core::Representation;
    use crate::error::GraphError;
    use crate::graph::UndirectedGraph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const BOTH: [Representation; 2] = [Representation::Dense, Representation::Sparse];

    fn triangle(r: Representation) -> UndirectedGraph {
        UndirectedGraph::from_edges(3, r, true, [(1, 2, 5.0), (2, 3, 1.0), (1, 3, 10.0)]).unwrap()
    }

    /// Floyd-Warshall distances, used as an oracle.
    fn all_pairs<G: GraphBase>(graph: &G) -> Vec<Vec<f64>> {
        let n = graph.order();
        let mut d = vec![vec![INFINITY; n]; n];
        for u in graph.node_ids() {
            d[u.0][u.0] = 0.0;
            for (v, w) in graph.neighbors(u) {
                d[u.0][v.0] = w;
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if d[i][k] + d[k][j] < d[i][j] {
                        d[i][j] = d[i][k] + d[k][j];
                    }
                }
            }
        }
        d
    }

    fn random_graph(
        rng: &mut Pcg64Mcg,
        n: usize,
        m: usize,
        r: Representation,
        weighted: bool,
    ) -> UndirectedGraph {
        let mut g = UndirectedGraph::with_representation(n, r, weighted).unwrap();
        for _ in 0..m {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u != v {
                let w = f64::from(rng.random_range(0..20u32));
                g.add_edge(NodeId(u), NodeId(v), w).unwrap();
            }
        }
        g
    }

    #[test]
    fn weighted_triangle() {
        for r in BOTH {
            let sp = dijkstra(&triangle(r), Vertex(1)).unwrap();

            assert_eq!(sp.distances, vec![0.0, 5.0, 6.0]);
            assert_eq!(sp.path_to(NodeId(2)), vec![Vertex(1), Vertex(2), Vertex(3)]);
            assert_eq!(sp.path_to(NodeId(0)), vec![Vertex(1)]);
        }
    }

    #[test]
    fn unreachable_vertices() {
        for r in BOTH {
            let g = UndirectedGraph::from_edges(4, r, true, [(1, 2, 2.0), (3, 4, 1.0)]).unwrap();
            let sp = dijkstra(&g, Vertex(1)).unwrap();

            assert!(sp.distance_to(NodeId(2)).is_infinite());
            assert!(sp.path_to(NodeId(3)).is_empty());
            assert_eq!(sp.predecessors[2], None);

            let single = shortest_path(&g, Vertex(1), Vertex(4)).unwrap();
            assert!(!single.is_reachable());
            assert!(single.path.is_empty());
        }
    }

    #[test]
    fn zero_weight_edges() {
        let g = UndirectedGraph::from_edges(
            3,
            Representation::Sparse,
            true,
            [(1, 2, 0.0), (2, 3, 0.0), (1, 3, 0.5)],
        )
        .unwrap();
        let sp = dijkstra(&g, Vertex(1)).unwrap();
        assert_eq!(sp.distances, vec![0.0, 0.0, 0.0]);
        assert_eq!(sp.path_to(NodeId(2)), vec![Vertex(1), Vertex(2), Vertex(3)]);
    }

    #[test]
    fn single_destination_matches_full_run() {
        for r in BOTH {
            let g = triangle(r);
            let full = dijkstra(&g, Vertex(1)).unwrap();
            for d in 1..=3 {
                let single = shortest_path(&g, Vertex(1), Vertex(d)).unwrap();
                assert_eq!(single, full.shortest_path_to(NodeId(d - 1)));
            }
        }
    }

    #[test]
    fn out_of_range_endpoints() {
        let g = triangle(Representation::Dense);
        assert!(matches!(
            dijkstra(&g, Vertex(4)),
            Err(GraphError::VertexOutOfRange { vertex: 4, order: 3 })
        ));
        assert!(matches!(
            shortest_path(&g, Vertex(1), Vertex(0)),
            Err(GraphError::VertexOutOfRange { vertex: 0, order: 3 })
        ));
    }

    #[test]
    fn matches_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [5, 12, 25] {
            for m in [n, n * 3] {
                for r in BOTH {
                    let g = random_graph(rng, n, m, r, true);
                    let oracle = all_pairs(&g);
                    for s in 0..n {
                        let sp = dijkstra(&g, NodeId(s).to_vertex()).unwrap();
                        assert_eq!(sp.distances, oracle[s]);

                        for t in 0..n {
                            let path = sp.path_to(NodeId(t));
                            if oracle[s][t].is_infinite() {
                                assert!(path.is_empty());
                                continue;
                            }
                            let cost: f64 = path
                                .windows(2)
                                .map(|p| {
                                    g.weight_between(NodeId(p[0].0 - 1), NodeId(p[1].0 - 1))
                                        .unwrap()
                                })
                                .sum();
                            assert_eq!(cost, oracle[s][t]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unweighted_distances_equal_bfs_levels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        for n in [8, 20, 40] {
            for r in BOTH {
                let g = random_graph(rng, n, n * 2, r, false);
                for s in 0..n {
                    let root = NodeId(s).to_vertex();
                    let sp = dijkstra(&g, root).unwrap();
                    let tree = bfs(&g, root).unwrap();
                    for v in 0..n {
                        let expected = tree.levels[v].map_or(INFINITY, |l| l as f64);
                        assert_eq!(sp.distances[v], expected);
                    }
                }
            }
        }
    }
}
