use crate::graph::edge::Edge;
use crate::graph::extract::{Expansion, extract_edges};
use crate::graph::node::BellmanFordNode;
use crate::search::distance::DistanceMap;
use crate::search::error::SearchError;
use crate::search::trace::{PassRecord, SearchTrace};
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Single-source shortest paths over a caller's node type.
///
/// Call [`init_graph`](Self::init_graph) to extract edges, then
/// [`search`](Self::search) once. The edge list is consumed by the search;
/// the distance map stays readable until the next `init_graph`.
pub struct BellmanFordSearch<N: BellmanFordNode> {
    expansion: Expansion,
    record_trace: bool,
    vertex_count: usize,
    edges: Vec<Edge<N>>,
    dist: DistanceMap<N::Key>,
    trace: Option<SearchTrace<N::Key>>,
}

impl<N: BellmanFordNode + Clone> BellmanFordSearch<N> {
    pub fn new() -> Self {
        Self {
            expansion: Expansion::Listed,
            record_trace: false,
            vertex_count: 0,
            edges: Vec::new(),
            dist: DistanceMap::new(),
            trace: None,
        }
    }

    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    pub fn init_graph(&mut self, nodes: &[N]) {
        self.dist.clear();
        self.trace = None;
        let (edges, vertex_count) = extract_edges(nodes, self.expansion).into_parts();
        self.edges = edges;
        self.vertex_count = vertex_count;
    }

    /// Runs the relaxation from `source`. Fails only when a negative cycle is
    /// reachable, in which case the distance map must not be trusted.
    ///
    /// With no edges loaded this returns `Ok` and leaves the distance map as it
    /// was, including results of an earlier search.
    pub fn search(&mut self, source: &N) -> Result<(), SearchError> {
        if self.edges.is_empty() {
            debug!("no edges loaded, distance map left untouched");
            return Ok(());
        }

        let mut trace = self.record_trace.then(SearchTrace::new);
        let result = solve(
            &self.edges,
            self.vertex_count,
            source,
            &mut self.dist,
            trace.as_mut(),
        );
        self.trace = trace;
        self.edges.clear();

        match &result {
            Ok(()) => info!(
                "shortest paths from {:?} over {} vertices",
                source.key(),
                self.dist.len()
            ),
            Err(e) => warn!("search from {:?} failed: {}", source.key(), e),
        }
        result
    }

    pub fn distance_map(&self) -> &DistanceMap<N::Key> {
        &self.dist
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn trace(&self) -> Option<&SearchTrace<N::Key>> {
        self.trace.as_ref()
    }
}

impl<N: BellmanFordNode + Clone> Default for BellmanFordSearch<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Relaxes `edges` `V - 1` times from `source`, then checks once more for an
/// edge that still relaxes. `V` is `vertex_count` or the number of distinct
/// edge endpoints plus the source, whichever is larger.
///
/// Endpoints of every edge (and the source) are written into `dist`; other
/// entries already in `dist` are left alone. An empty edge list is a no-op.
pub fn solve<N: BellmanFordNode>(
    edges: &[Edge<N>],
    vertex_count: usize,
    source: &N,
    dist: &mut DistanceMap<N::Key>,
    mut trace: Option<&mut SearchTrace<N::Key>>,
) -> Result<(), SearchError> {
    if edges.is_empty() {
        return Ok(());
    }

    let mut index: BTreeMap<N::Key, usize> = BTreeMap::new();
    let mut keys: Vec<N::Key> = Vec::new();
    let mut intern = |key: N::Key| {
        *index.entry(key.clone()).or_insert_with(|| {
            keys.push(key);
            keys.len() - 1
        })
    };

    let links = edges
        .iter()
        .map(|e| {
            let (from, to) = e.keys();
            (intern(from), intern(to), e.weight())
        })
        .collect::<Vec<(usize, usize, f64)>>();
    let src = intern(source.key());

    let mut d = vec![f64::INFINITY; keys.len()];
    d[src] = 0.0;

    if let Some(t) = trace.as_deref_mut() {
        t.push(PassRecord::new(0, 0, snapshot(&keys, &d)));
    }

    // unlisted successors are endpoints too and need their own passes
    let passes = vertex_count.max(keys.len());
    for pass in 1..passes {
        let relaxed = relax_pass(&links, &mut d);
        debug!("pass {}: {} edges relaxed", pass, relaxed);
        if let Some(t) = trace.as_deref_mut() {
            t.push(PassRecord::new(pass, relaxed, snapshot(&keys, &d)));
        }
    }

    let violation = links
        .iter()
        .position(|&(u, v, w)| d[u] < f64::INFINITY && d[u] + w < d[v]);

    keys.iter()
        .zip(d.iter())
        .for_each(|(k, dv)| dist.insert(k.clone(), *dv));

    match violation {
        Some(edge) => Err(SearchError::NegativeCycle {
            edge,
            weight: links[edge].2,
        }),
        None => Ok(()),
    }
}

fn relax_pass(links: &[(usize, usize, f64)], d: &mut [f64]) -> usize {
    let mut relaxed = 0;
    for &(u, v, w) in links {
        // no known distance yet
        if d[u] == f64::INFINITY {
            continue;
        }
        let candidate = d[u] + w;
        if candidate < d[v] {
            d[v] = candidate;
            relaxed += 1;
        }
    }
    relaxed
}

fn snapshot<K: Ord + Clone>(keys: &[K], d: &[f64]) -> DistanceMap<K> {
    keys.iter().cloned().zip(d.iter().copied()).collect()
}
