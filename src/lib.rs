//! Single-source shortest paths with Bellman-Ford over caller-defined nodes.
//!
//! Implement [`BellmanFordNode`] for your node type, hand the nodes to
//! [`BellmanFordSearch::init_graph`], then call
//! [`BellmanFordSearch::search`] from a source and read
//! [`BellmanFordSearch::distance_map`].

pub mod graph;
pub mod scenario;
pub mod search;

pub use graph::extract::{Expansion, Extraction, extract_edges};
pub use graph::node::{BellmanFordNode, NO_EDGE, NodeId};
pub use search::bellman_ford::{BellmanFordSearch, solve};
pub use search::distance::DistanceMap;
pub use search::error::SearchError;
