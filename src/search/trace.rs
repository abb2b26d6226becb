use crate::search::distance::DistanceMap;

#[derive(Clone, Debug)]
pub struct PassRecord<K> {
    /// relaxation pass, 0 for the initial seeding
    pass: usize,
    relaxed: usize,
    distances: DistanceMap<K>,
}

impl<K> PassRecord<K> {
    pub fn new(pass: usize, relaxed: usize, distances: DistanceMap<K>) -> Self {
        Self {
            pass,
            relaxed,
            distances,
        }
    }

    pub fn pass(&self) -> usize {
        self.pass
    }

    /// Number of edges that lowered a distance during this pass.
    pub fn relaxed(&self) -> usize {
        self.relaxed
    }

    pub fn distances(&self) -> &DistanceMap<K> {
        &self.distances
    }
}

/// Distance snapshots taken during one search, starting with the initial
/// seeding as pass 0.
#[derive(Clone, Debug)]
pub struct SearchTrace<K> {
    passes: Vec<PassRecord<K>>,
}

impl<K> SearchTrace<K> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn push(&mut self, record: PassRecord<K>) {
        self.passes.push(record);
    }

    pub fn passes(&self) -> &[PassRecord<K>] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// First pass after which no distance changed, if any.
    pub fn converged_at(&self) -> Option<usize> {
        self.passes
            .iter()
            .skip(1)
            .find(|p| p.relaxed() == 0)
            .map(|p| p.pass())
    }
}

impl<K> Default for SearchTrace<K> {
    fn default() -> Self {
        Self::new()
    }
}
