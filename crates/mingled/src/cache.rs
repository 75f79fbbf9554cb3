//! Bounded, insertion-ordered caches.
//!
//! The compiler keeps three of these: the whole-result cache, the
//! per-token cache, and (in the CSS backend) the selector-escape cache.
//! Eviction removes a fixed fraction of the oldest entries in one batch
//! once the configured capacity is reached, so a hot cache does not pay
//! a removal on every insert.

use std::collections::{HashMap, VecDeque};

/// Oldest fifth of the cache goes in one eviction batch.
const EVICTION_DIVISOR: usize = 5;

/// An insertion-ordered map with batch eviction.
///
/// A capacity of zero disables the cache entirely: every lookup misses
/// and inserts are dropped.
#[derive(Debug)]
pub struct BoundedCache<V> {
    map: HashMap<String, V>,
    order: VecDeque<String>,
    capacity: usize,
}

impl<V> BoundedCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    /// Inserts an entry, batch-evicting the oldest entries first when
    /// the cache is full. Re-inserting an existing key replaces its
    /// value without consuming extra capacity.
    pub fn insert(&mut self, key: String, value: V) {
        if self.capacity == 0 {
            return;
        }
        if !self.map.contains_key(&key) {
            if self.map.len() >= self.capacity {
                self.evict_batch();
            }
            self.order.push_back(key.clone());
        }
        self.map.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    fn evict_batch(&mut self) {
        let batch = (self.capacity / EVICTION_DIVISOR).max(1);
        for _ in 0..batch {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.map.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_capacity() {
        let mut cache = BoundedCache::new(10);
        for i in 0..100 {
            cache.insert(format!("key-{i}"), i);
            assert!(cache.len() <= 10);
        }
    }

    #[test]
    fn evicts_oldest_in_batches() {
        let mut cache = BoundedCache::new(10);
        for i in 0..10 {
            cache.insert(format!("key-{i}"), i);
        }
        // 11th insert drops the oldest two (10 / 5)
        cache.insert("key-10".to_string(), 10);
        assert_eq!(cache.len(), 9);
        assert!(cache.get("key-0").is_none());
        assert!(cache.get("key-1").is_none());
        assert_eq!(cache.get("key-2"), Some(&2));
        assert_eq!(cache.get("key-10"), Some(&10));
    }

    #[test]
    fn reinsert_does_not_duplicate() {
        let mut cache = BoundedCache::new(4);
        cache.insert("a".to_string(), 1);
        cache.insert("a".to_string(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a"), Some(&2));
    }

    #[test]
    fn zero_capacity_disables() {
        let mut cache = BoundedCache::new(0);
        cache.insert("a".to_string(), 1);
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }
}
