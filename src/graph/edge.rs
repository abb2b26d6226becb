use crate::graph::node::BellmanFordNode;

#[derive(Clone, Debug)]
pub struct Edge<N> {
    from: N,
    to: N,
    /// may be negative
    weight: f64,
}

impl<N: BellmanFordNode> Edge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> &N {
        &self.from
    }

    pub fn to(&self) -> &N {
        &self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn keys(&self) -> (N::Key, N::Key) {
        (self.from.key(), self.to.key())
    }
}
