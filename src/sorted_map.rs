use std::iter::FromIterator;

use itertools::Itertools;
use log::debug;

use crate::algo::lower_bound_by_key;

/// A map that keeps its entries ordered by key in a single vector.
///
/// Lookups are O(log n); inserts and removes shift the tail of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Ok(index)` of the entry for `key`, or `Err(index)` where it would be
    /// inserted.
    fn search(&self, key: &K) -> Result<usize, usize> {
        let i = lower_bound_by_key(&self.entries, &key, |(k, _)| k);
        if i < self.entries.len() && self.entries[i].0 == *key {
            Ok(i)
        } else {
            Err(i)
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match self.search(key) {
            Result::Ok(i) => Some(&self.entries[i].1),
            Result::Err(_) => None,
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            Result::Ok(i) => Some(&mut self.entries[i].1),
            Result::Err(_) => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Inserts or replaces the value for `key`, returning the old value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Result::Ok(i) => {
                debug!("replacing entry {} of {}", i, self.entries.len());
                Some(std::mem::replace(&mut self.entries[i].1, value))
            }
            Result::Err(i) => {
                debug!("inserting entry at {} of {}", i, self.entries.len());
                self.entries.insert(i, (key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.search(key) {
            Result::Ok(i) => {
                debug!("removing entry {} of {}", i, self.entries.len());
                Some(self.entries.remove(i).1)
            }
            Result::Err(_) => None,
        }
    }
}

impl<K, V> SortedMap<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    /// Later entries win over earlier ones with the same key.
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<(K, V)> = iter.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            entries: entries
                .into_iter()
                .coalesce(|prev, next| {
                    if prev.0 == next.0 {
                        Ok(next)
                    } else {
                        Err((prev, next))
                    }
                })
                .collect(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SortedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (K, V)>, fn(&'a (K, V)) -> (&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        fn split<K, V>(entry: &(K, V)) -> (&K, &V) {
            (&entry.0, &entry.1)
        }
        self.entries.iter().map(split as fn(&'a (K, V)) -> (&'a K, &'a V))
    }
}
