use bellgraph::graph::graph::Graph;
use bellgraph::graph::extract::Expansion;
use bellgraph::scenario::random::{RandomScenario, Weights};
use bellgraph::scenario::sample::SampleScenario;
use bellgraph::scenario::scenario::Scenario;
use clap::{Parser, ValueEnum};

/// Shortest paths from a single source with Bellman-Ford.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opts {
    #[arg(long, value_enum, default_value_t = ScenarioKind::Sample)]
    pub scenario: ScenarioKind,
    /// Seed for the random scenario
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Vertex count for the random scenario
    #[arg(long, default_value_t = 8)]
    pub nodes: usize,
    /// Plant a negative cycle in the random scenario
    #[arg(long)]
    pub negative_cycle: bool,
    /// Source vertex id; defaults to the scenario's source
    #[arg(long)]
    pub source: Option<usize>,
    #[arg(long, value_enum, default_value_t = ExpansionArg::Listed)]
    pub expansion: ExpansionArg,
    /// Step through relaxation passes interactively
    #[arg(long)]
    pub tui: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScenarioKind {
    Sample,
    Random,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExpansionArg {
    Listed,
    Reachable,
}

impl From<ExpansionArg> for Expansion {
    fn from(arg: ExpansionArg) -> Self {
        match arg {
            ExpansionArg::Listed => Expansion::Listed,
            ExpansionArg::Reachable => Expansion::Reachable,
        }
    }
}

impl Opts {
    pub fn build_scenario(&self) -> (Graph, Box<dyn Scenario>) {
        match self.scenario {
            ScenarioKind::Sample => SampleScenario::build(),
            ScenarioKind::Random => {
                let weights = if self.negative_cycle {
                    Weights::NegativeCycle
                } else {
                    Weights::Mixed
                };
                RandomScenario::build(self.seed, self.nodes, weights)
            }
        }
    }
}
