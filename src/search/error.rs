use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// `edge` is the index, in extraction order, of the first edge that
    /// could still be relaxed after all passes.
    #[error("graph contains negative weight cycle (edge #{edge}, weight {weight})")]
    NegativeCycle { edge: usize, weight: f64 },
}
