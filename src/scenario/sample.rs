use crate::graph::graph::{Graph, Link, Vertex};
use crate::graph::node::NodeId;
use crate::scenario::scenario::Scenario;

/// Five vertices, eight links, one negative link and a zero-weight cycle
/// (1 -> 4 -> 3 -> 1).
pub struct SampleScenario {
    source: NodeId,
}

impl SampleScenario {
    pub fn build() -> (Graph, Box<dyn Scenario>) {
        let vertices = (0..5)
            .map(|i| Vertex::new(NodeId(i), i.to_string()))
            .collect();

        let links = vec![
            Link::new(NodeId(0), NodeId(1), -1.0),
            Link::new(NodeId(0), NodeId(2), 4.0),
            Link::new(NodeId(1), NodeId(2), 3.0),
            Link::new(NodeId(1), NodeId(3), 2.0),
            Link::new(NodeId(1), NodeId(4), 2.0),
            Link::new(NodeId(3), NodeId(1), 1.0),
            Link::new(NodeId(3), NodeId(2), 5.0),
            Link::new(NodeId(4), NodeId(3), -3.0),
        ];

        let graph = Graph::new(vertices, links);
        let scenario = SampleScenario { source: NodeId(0) };

        (graph, Box::new(scenario))
    }
}

impl Scenario for SampleScenario {
    fn name(&self) -> &str {
        "sample"
    }

    fn source(&self) -> NodeId {
        self.source
    }
}
