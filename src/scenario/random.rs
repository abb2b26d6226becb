use crate::graph::graph::{Graph, Link, Vertex};
use crate::graph::node::NodeId;
use crate::scenario::scenario::Scenario;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weights {
    NonNegative,
    /// Negative links allowed, but every cycle has positive weight.
    Mixed,
    /// Like `Mixed`, plus one negative cycle reachable from the source.
    NegativeCycle,
}

pub struct RandomScenario {
    name: String,
    source: NodeId,
}

impl RandomScenario {
    /// Every vertex is reachable from `NodeId(0)`.
    pub fn build(seed: u64, vertex_count: usize, weights: Weights) -> (Graph, Box<dyn Scenario>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let nid = vertex_count.max(1);

        let vertices = (0..nid)
            .map(|i| Vertex::new(NodeId(i), format!("v{}", i)))
            .collect::<Vec<_>>();
        let all_nodes: Vec<NodeId> = (0..nid).map(NodeId).collect();

        // link weight = base + p[from] - p[to], so cycles keep the sum of bases
        let potential = all_nodes
            .iter()
            .map(|_| match weights {
                Weights::NonNegative => 0.0,
                Weights::Mixed | Weights::NegativeCycle => rng.gen_range(0.0..20.0),
            })
            .collect::<Vec<f64>>();
        let p = |id: NodeId| potential[id.index()];

        let mut links = Vec::new();
        let mut has_link = vec![vec![false; nid]; nid];

        let mut add_link = |from: NodeId, to: NodeId, base: f64| {
            if from == to || has_link[from.index()][to.index()] {
                return;
            }
            has_link[from.index()][to.index()] = true;
            links.push(Link::new(from, to, base + p(from) - p(to)));
        };

        let mut reachable = vec![false; nid];
        reachable[0] = true;

        let mut frontier = vec![NodeId(0)];
        while reachable.iter().any(|r| !r) {
            let from = frontier[rng.gen_range(0..frontier.len())];
            let to = all_nodes[rng.gen_range(0..all_nodes.len())];
            if !reachable[to.index()] {
                add_link(from, to, rng.gen_range(1.0..10.0));
                reachable[to.index()] = true;
                frontier.push(to);
            }
        }

        let extra_links = nid * 2;
        for _ in 0..extra_links {
            let from = all_nodes[rng.gen_range(0..all_nodes.len())];
            let to = all_nodes[rng.gen_range(0..all_nodes.len())];
            add_link(from, to, rng.gen_range(1.0..10.0));
        }

        if weights == Weights::NegativeCycle {
            let ring = if nid >= 3 {
                all_nodes
                    .choose_multiple(&mut rng, 3)
                    .copied()
                    .collect::<Vec<_>>()
            } else {
                vec![NodeId(0)]
            };
            // appended last so they replace any link between the same pair
            for (i, from) in ring.iter().enumerate() {
                let to = ring[(i + 1) % ring.len()];
                links.push(Link::new(*from, to, p(*from) - p(to) - 1.0));
            }
        }

        let graph = Graph::new(vertices, links);
        let scenario = RandomScenario {
            name: format!("random-{}", seed),
            source: NodeId(0),
        };

        (graph, Box::new(scenario))
    }
}

impl Scenario for RandomScenario {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> NodeId {
        self.source
    }
}
