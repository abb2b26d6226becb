use std::collections::BTreeMap;
use std::collections::btree_map;

/// Shortest known distance per vertex key. Only vertices that take part in at
/// least one extracted edge (plus the source) are present; an infinite value
/// means no path was found.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMap<K> {
    dist: BTreeMap<K, f64>,
}

impl<K: Ord> DistanceMap<K> {
    pub fn new() -> Self {
        Self {
            dist: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.dist.get(key).copied()
    }

    pub fn is_reachable(&self, key: &K) -> bool {
        self.get(key).is_some_and(|d| d < f64::INFINITY)
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, f64> {
        self.dist.iter()
    }

    pub(crate) fn insert(&mut self, key: K, distance: f64) {
        self.dist.insert(key, distance);
    }

    pub(crate) fn clear(&mut self) {
        self.dist.clear();
    }
}

impl<K: Ord> Default for DistanceMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K: Ord> IntoIterator for &'a DistanceMap<K> {
    type Item = (&'a K, &'a f64);
    type IntoIter = btree_map::Iter<'a, K, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> FromIterator<(K, f64)> for DistanceMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            dist: iter.into_iter().collect(),
        }
    }
}
