pub mod edge;
pub mod extract;
pub mod graph;
pub mod node;
