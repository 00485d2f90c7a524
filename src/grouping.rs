use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// Keyed groups that iterate in the order each key was first seen.
///
/// Tie-breaks across the analytics ("first artist encountered wins") depend on
/// this order, so it never falls back to hash order.
#[derive(Debug, Clone)]
pub struct Grouped<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Grouped<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Grouped<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the group for `key`, creating it with `init` if this is a new key
    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, init()));
                position
            }
        };
        &mut self.entries[position].1
    }

    #[cfg(test)]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<K: Eq + Hash + Clone, V: Default> Grouped<K, V> {
    pub fn entry_or_default(&mut self, key: K) -> &mut V {
        self.entry_or_insert_with(key, V::default)
    }
}

impl<K, V> IntoIterator for Grouped<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Grouped<K, V> {
    // Order is part of the value
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Serialize, V: Serialize> Serialize for Grouped<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Group items by a key, folding each item into its group's accumulator.
/// Groups come out in first-encountered key order.
pub fn group_by<I, T, K, A, F, G>(items: I, mut key_of: F, mut accumulate: G) -> Grouped<K, A>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    A: Default,
    F: FnMut(&T) -> K,
    G: FnMut(&mut A, T),
{
    let mut groups = Grouped::new();
    for item in items {
        let key = key_of(&item);
        accumulate(groups.entry_or_default(key), item);
    }
    groups
}

/// Transform every group independently, keeping key order
pub fn project<K, A, U, F>(groups: Grouped<K, A>, mut transform: F) -> Grouped<K, U>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K, A) -> U,
{
    let mut projected = Grouped::new();
    for (key, accumulator) in groups {
        let value = transform(&key, accumulator);
        projected.entry_or_insert_with(key, || value);
    }
    projected
}

/// Running totals over a group of records
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreamTotals {
    pub count: usize,
    pub streams: u64,
    pub rating: f64,
}

impl StreamTotals {
    pub fn add(&mut self, streams: u64, rating: f64) {
        self.count += 1;
        self.streams += streams;
        self.rating += rating;
    }

    pub fn average_streams(&self) -> f64 {
        mean(self.streams as f64, self.count)
    }

    pub fn average_rating(&self) -> f64 {
        mean(self.rating, self.count)
    }
}

/// Arithmetic mean of a non-empty group
pub fn mean(total: f64, count: usize) -> f64 {
    // Groups only exist once an item lands in them
    debug_assert!(count > 0, "mean of an empty group");
    total / count as f64
}
