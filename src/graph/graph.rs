use crate::graph::node::{BellmanFordNode, NO_EDGE, NodeId};

#[derive(Clone, Debug)]
pub struct Vertex {
    id: NodeId,
    name: String,
}

impl Vertex {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Link {
    from: NodeId,
    to: NodeId,
    weight: f64,
}

impl Link {
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Adjacency-list digraph. A later link between the same pair of vertices
/// replaces the earlier one.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    links: Vec<Link>,
    adj: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(vertices: Vec<Vertex>, links: Vec<Link>) -> Self {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
        links.iter().enumerate().for_each(|(i, l)| {
            let out = &mut adj[l.from().index()];
            match out.iter_mut().find(|j| links[**j].to() == l.to()) {
                Some(j) => *j = i,
                None => out.push(i),
            }
        });
        Self {
            vertices,
            links,
            adj,
        }
    }

    /// Vertices are named after their index.
    pub fn from_links(vertex_count: usize, links: &[(usize, usize, f64)]) -> Self {
        let vertices = (0..vertex_count)
            .map(|i| Vertex::new(NodeId(i), i.to_string()))
            .collect();
        let links = links
            .iter()
            .map(|&(from, to, weight)| Link::new(NodeId(from), NodeId(to), weight))
            .collect();
        Self::new(vertices, links)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_by_id(&self, id: NodeId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Links that survived overwriting, in insertion order per source vertex.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.adj[id.index()].iter().map(|i| &self.links[*i])
    }

    pub fn link_count(&self) -> usize {
        self.adj.iter().map(|out| out.len()).sum()
    }

    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.outgoing(from)
            .find(|l| l.to() == to)
            .map(|l| l.weight())
    }

    pub fn node(&self, id: NodeId) -> GraphNode<'_> {
        GraphNode { graph: self, id }
    }

    pub fn nodes(&self) -> Vec<GraphNode<'_>> {
        self.vertices.iter().map(|v| self.node(v.id())).collect()
    }
}

/// Borrowed handle that plugs a [`Graph`] vertex into the search engine.
#[derive(Clone, Copy, Debug)]
pub struct GraphNode<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> GraphNode<'g> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &'g str {
        self.graph.vertex_by_id(self.id).name()
    }
}

impl BellmanFordNode for GraphNode<'_> {
    type Key = NodeId;

    fn key(&self) -> NodeId {
        self.id
    }

    fn successors(&self) -> Vec<Self> {
        self.graph
            .outgoing(self.id)
            .map(|l| self.graph.node(l.to()))
            .collect()
    }

    fn cost(&self, successor: &Self) -> f64 {
        self.graph.weight(self.id, successor.id).unwrap_or(NO_EDGE)
    }
}
