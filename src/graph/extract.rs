use crate::graph::edge::Edge;
use crate::graph::node::BellmanFordNode;
use log::{debug, warn};
use std::collections::{BTreeSet, VecDeque};

/// Which vertices get their outgoing edges expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
    /// Only nodes present in the input. Successors that are never listed
    /// stay leaves.
    #[default]
    Listed,
    /// Input nodes first, then every successor discovered along the way.
    Reachable,
}

#[derive(Clone, Debug)]
pub struct Extraction<N> {
    edges: Vec<Edge<N>>,
    /// number of distinct expanded keys
    vertex_count: usize,
}

impl<N> Extraction<N> {
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn into_parts(self) -> (Vec<Edge<N>>, usize) {
        (self.edges, self.vertex_count)
    }
}

pub fn extract_edges<N>(nodes: &[N], expansion: Expansion) -> Extraction<N>
where
    N: BellmanFordNode + Clone,
{
    let mut closed: BTreeSet<N::Key> = BTreeSet::new();
    let mut open: VecDeque<N> = nodes.iter().cloned().collect();
    let mut edges = Vec::new();

    while let Some(src) = open.pop_front() {
        if !closed.insert(src.key()) {
            continue;
        }

        for succ in src.successors() {
            let weight = src.cost(&succ);
            if !weight.is_finite() {
                warn!(
                    "edge {:?} -> {:?} has non-finite weight {}",
                    src.key(),
                    succ.key(),
                    weight
                );
            }
            if expansion == Expansion::Reachable && !closed.contains(&succ.key()) {
                open.push_back(succ.clone());
            }
            edges.push(Edge::new(src.clone(), succ, weight));
        }
    }

    debug!(
        "extracted {} edges over {} vertices ({:?})",
        edges.len(),
        closed.len(),
        expansion
    );

    Extraction {
        edges,
        vertex_count: closed.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph::Graph;
    use crate::graph::node::NodeId;

    fn sorted_keys<N: BellmanFordNode>(edges: &[Edge<N>]) -> Vec<(N::Key, N::Key)> {
        let mut keys = edges.iter().map(|e| e.keys()).collect::<Vec<_>>();
        keys.sort();
        keys
    }

    #[test]
    fn test_duplicates_are_expanded_once() {
        let graph = Graph::from_links(3, &[(0, 1, 1.0), (0, 2, 2.0), (1, 2, 3.0)]);
        let n = graph.nodes();
        let repeated = vec![n[0], n[1], n[0], n[2], n[1], n[0]];

        let dedup = extract_edges(&n, Expansion::Listed);
        let dup = extract_edges(&repeated, Expansion::Listed);

        assert_eq!(3, dup.edges().len());
        assert_eq!(3, dup.vertex_count());
        assert_eq!(sorted_keys(dedup.edges()), sorted_keys(dup.edges()));
    }

    #[test]
    fn test_edges_follow_input_order() {
        let graph = Graph::from_links(3, &[(0, 1, 1.0), (2, 0, 5.0), (1, 2, 3.0)]);
        let n = graph.nodes();

        let ex = extract_edges(&[n[2], n[0], n[1]], Expansion::Listed);
        let keys = ex.edges().iter().map(|e| e.keys()).collect::<Vec<_>>();

        assert_eq!(
            vec![
                (NodeId(2), NodeId(0)),
                (NodeId(0), NodeId(1)),
                (NodeId(1), NodeId(2)),
            ],
            keys
        );
        assert_eq!(5.0, ex.edges()[0].weight());
    }

    #[test]
    fn test_unlisted_successor_is_not_expanded() {
        let graph = Graph::from_links(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let n = graph.nodes();

        let ex = extract_edges(&[n[0]], Expansion::Listed);

        assert_eq!(vec![(NodeId(0), NodeId(1))], sorted_keys(ex.edges()));
        assert_eq!(1, ex.vertex_count());
    }

    #[test]
    fn test_reachable_expansion_follows_successors() {
        let graph = Graph::from_links(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 0, 1.0)],
        );
        let n = graph.nodes();

        let ex = extract_edges(&[n[0]], Expansion::Reachable);

        assert_eq!(
            vec![
                (NodeId(0), NodeId(1)),
                (NodeId(1), NodeId(2)),
                (NodeId(2), NodeId(0)),
            ],
            sorted_keys(ex.edges())
        );
        assert_eq!(3, ex.vertex_count());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let graph = Graph::from_links(
            4,
            &[(0, 1, 1.0), (1, 3, -2.0), (3, 2, 4.0), (0, 2, 7.0)],
        );
        let n = graph.nodes();

        let first = extract_edges(&n, Expansion::Listed);
        let second = extract_edges(&n, Expansion::Listed);

        assert_eq!(sorted_keys(first.edges()), sorted_keys(second.edges()));
        assert_eq!(first.vertex_count(), second.vertex_count());
    }

    #[test]
    fn test_empty_input() {
        let graph = Graph::from_links(0, &[]);
        let ex = extract_edges(&graph.nodes(), Expansion::Listed);

        assert!(ex.edges().is_empty());
        assert_eq!(0, ex.vertex_count());
    }
}
