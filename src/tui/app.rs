use bellgraph::graph::graph::Graph;
use bellgraph::graph::node::NodeId;
use bellgraph::search::error::SearchError;
use bellgraph::search::trace::{PassRecord, SearchTrace};

pub struct App {
    pub running: bool,
    scenario: String,
    source: NodeId,
    names: Vec<String>,
    trace: SearchTrace<NodeId>,
    outcome: Result<(), SearchError>,
    pass: usize,
}

impl App {
    pub fn new(
        scenario: &str,
        source: NodeId,
        graph: &Graph,
        trace: SearchTrace<NodeId>,
        outcome: Result<(), SearchError>,
    ) -> Self {
        Self {
            running: true,
            scenario: scenario.to_owned(),
            source,
            names: graph.vertices().iter().map(|v| v.name().to_owned()).collect(),
            trace,
            outcome,
            pass: 0,
        }
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    pub fn outcome(&self) -> &Result<(), SearchError> {
        &self.outcome
    }

    pub fn pass_count(&self) -> usize {
        self.trace.len()
    }

    pub fn current(&self) -> Option<&PassRecord<NodeId>> {
        self.trace.passes().get(self.pass)
    }

    pub fn previous(&self) -> Option<&PassRecord<NodeId>> {
        self.pass
            .checked_sub(1)
            .and_then(|p| self.trace.passes().get(p))
    }

    pub fn is_last(&self) -> bool {
        self.pass + 1 >= self.trace.len()
    }

    pub fn step(&mut self) {
        if !self.is_last() {
            self.pass += 1;
        }
    }

    pub fn back(&mut self) {
        self.pass = self.pass.saturating_sub(1);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
