use crate::graph::node::NodeId;

pub trait Scenario {
    fn name(&self) -> &str;
    fn source(&self) -> NodeId;
}
