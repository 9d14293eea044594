//! Bounded memoization cache for contrast computations.
//!
//! Entries are evicted in insertion order, a batch at a time: when an insert
//! would push the cache past its bound, the oldest `eviction_batch` entries
//! are dropped first. Reads never change eviction order.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::color::Rgb;

use super::hierarchy::TextHierarchy;
use super::result::OptimalTextColor;

/// Default maximum number of cached entries.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default number of entries dropped per eviction.
pub const DEFAULT_EVICTION_BATCH: usize = 100;

/// Operation plus operands a cached value was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Hex parse, keyed by the literal input string
    Parse(String),
    /// Relative luminance of a channel triple
    Luminance(Rgb),
    /// Contrast ratio, keyed by both inputs in call order
    Contrast(String, String),
    /// Optimal text color for a background and hierarchy
    OptimalText(String, TextHierarchy),
}

/// Result of the operation named by the matching [`CacheKey`].
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// `None` records an invalid color
    Parse(Option<Rgb>),
    Luminance(f64),
    Contrast(f64),
    OptimalText(OptimalTextColor),
}

/// Cache size and hit statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,
    /// Configured bound
    pub max_size: usize,
    /// `size / max_size` as a percentage
    pub utilization_pct: f64,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that missed
    pub misses: u64,
}

/// FIFO-batch bounded cache.
#[derive(Debug)]
pub struct ContrastCache {
    entries: HashMap<CacheKey, CacheValue>,
    order: VecDeque<CacheKey>,
    max_entries: usize,
    eviction_batch: usize,
    hits: u64,
    misses: u64,
}

impl Default for ContrastCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_EVICTION_BATCH)
    }
}

impl ContrastCache {
    /// Create a cache holding at most `max_entries`.
    ///
    /// Both values are clamped to at least 1, and the batch to at most the bound.
    pub fn new(max_entries: usize, eviction_batch: usize) -> Self {
        let max_entries = max_entries.max(1);
        let eviction_batch = eviction_batch.clamp(1, max_entries);

        Self {
            entries: HashMap::with_capacity(max_entries),
            order: VecDeque::with_capacity(max_entries),
            max_entries,
            eviction_batch,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a cached value, recording a hit or miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<CacheValue> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a value, evicting the oldest batch first if the cache is full.
    pub fn insert(&mut self, key: CacheKey, value: CacheValue) {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return;
        }

        if self.entries.len() >= self.max_entries {
            self.evict_batch();
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    fn evict_batch(&mut self) {
        let count = self.eviction_batch.min(self.order.len());
        for key in self.order.drain(..count) {
            self.entries.remove(&key);
        }
        tracing::debug!("Evicted {} contrast cache entries", count);
    }

    /// Drop every entry and reset hit counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            max_size: self.max_entries,
            utilization_pct: self.entries.len() as f64 / self.max_entries as f64 * 100.0,
            hits: self.hits,
            misses: self.misses,
        }
    }
}
