use std::fmt::Debug;

/// Cost reported for a successor that has no direct edge from the node.
pub const NO_EDGE: f64 = f64::INFINITY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Capabilities a caller's node type provides to the shortest-path engine.
///
/// Two nodes with the same [`key`](BellmanFordNode::key) are the same vertex,
/// whatever else they carry.
pub trait BellmanFordNode: Sized {
    type Key: Ord + Clone + Debug;

    fn key(&self) -> Self::Key;

    fn successors(&self) -> Vec<Self>;

    /// Weight of the edge from `self` to `successor`, or [`NO_EDGE`] when
    /// `successor` is not adjacent.
    fn cost(&self, successor: &Self) -> f64;
}
