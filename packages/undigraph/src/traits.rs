//! Capability traits shared by the storage backends and the graph wrapper.

use std::fmt::Debug;

use crate::core::NodeId;
use crate::error::Result;

/// Minimal read-only graph trait for storage and wrappers.
///
/// `neighbors` is the single iteration primitive every algorithm uses, so
/// algorithms are written once and run on either backend.
pub trait GraphBase {
    /// Number of vertices, fixed at construction.
    fn order(&self) -> usize;
    /// Number of unordered edges.
    fn size(&self) -> usize;

    fn degree(&self, v: NodeId) -> usize;

    /// `(neighbor, weight)` pairs of `v`. The iterator borrows the graph and can
    /// be requested again as often as needed.
    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_>;

    /// Weight of the edge `{u, v}`, if present.
    fn weight_between(&self, u: NodeId, v: NodeId) -> Option<f64>;

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new((0..self.order()).map(NodeId))
    }
}

/// Storage types implement this to mark they are a storage representation.
pub trait StorageRepresentation: GraphBase + Debug + Clone {
    /// Empty storage sized for exactly `order` vertices.
    fn with_order(order: usize) -> Result<Self>;
}

/// Insertion into a storage. Callers are responsible for bounds and
/// self-loop checks; storages only enforce the simple-graph rule.
pub trait MutableStorage: StorageRepresentation {
    /// Stores `{u, v}` in both directions. Returns `false` without touching
    /// anything when the pair is already adjacent.
    fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> bool;
}
