//! Byte-bounded LRU cache of resolved literals.
//!
//! Each entry costs the byte length of its value (at least 1). When an insert
//! pushes the total cost over capacity, least-recently-used entries are
//! evicted until it fits. A value larger than the whole capacity is never
//! cached.
//!
//! The cache carries a *generation*. [`ResolutionCache::clear`] bumps it, and
//! inserts tagged with an older generation are dropped, so a resolution that
//! started before a store replacement cannot repopulate the cache with a
//! stale value after it.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cached paths.
    pub entries: usize,
    /// Sum of entry costs in bytes.
    pub cost: usize,
    /// Maximum total cost.
    pub capacity: usize,
    /// Lookups that found a value.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
}

#[derive(Debug)]
struct Entry {
    value: String,
    cost: usize,
    tick: u64,
}

#[derive(Debug, Default)]
struct LruState {
    entries: HashMap<String, Entry>,
    // tick -> key, oldest first
    order: BTreeMap<u64, String>,
    tick: u64,
    cost: usize,
    generation: u64,
    hits: u64,
    misses: u64,
}

impl LruState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn remove(&mut self, key: &str) -> Option<Entry> {
        let entry = self.entries.remove(key)?;
        self.order.remove(&entry.tick);
        self.cost -= entry.cost;
        Some(entry)
    }

    fn evict_to(&mut self, capacity: usize) {
        while self.cost > capacity {
            let Some((_, key)) = self.order.pop_first() else {
                break;
            };
            if let Some(entry) = self.entries.remove(&key) {
                self.cost -= entry.cost;
                log::trace!("cache evict {} ({} bytes)", key, entry.cost);
            }
        }
    }
}

/// Thread-safe path -> resolved literal cache.
#[derive(Debug)]
pub struct ResolutionCache {
    capacity: usize,
    state: Mutex<LruState>,
}

impl ResolutionCache {
    /// Creates a cache holding at most `capacity` bytes of values.
    ///
    /// A capacity of `0` disables caching: every insert is ignored.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(LruState::default()),
        }
    }

    // Poisoning only means another thread panicked mid-update; the state
    // itself is always left consistent between statements.
    fn lock(&self) -> MutexGuard<'_, LruState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The cost of caching `value`.
    pub fn cost_of(value: &str) -> usize {
        value.len().max(1)
    }

    /// Returns the cached value for `key`, marking it most recently used.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut state = self.lock();
        let tick = state.next_tick();
        let found = match state.entries.get_mut(key) {
            Some(entry) => {
                let previous = entry.tick;
                entry.tick = tick;
                Some((previous, entry.value.clone()))
            }
            None => None,
        };

        match found {
            Some((previous, value)) => {
                state.order.remove(&previous);
                state.order.insert(tick, key.to_string());
                state.hits += 1;
                Some(value)
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Caches `value` under `key` if `generation` is still current.
    ///
    /// Returns true if the value was stored.
    pub fn insert(&self, key: &str, value: &str, generation: u64) -> bool {
        let cost = Self::cost_of(value);
        if cost > self.capacity {
            return false;
        }

        let mut state = self.lock();
        if state.generation != generation {
            log::trace!("cache drop stale {} (generation {})", key, generation);
            return false;
        }

        state.remove(key);
        let tick = state.next_tick();
        state.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                cost,
                tick,
            },
        );
        state.order.insert(tick, key.to_string());
        state.cost += cost;
        state.evict_to(self.capacity);
        true
    }

    /// Drops every entry and starts a new generation.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
        state.cost = 0;
        state.generation += 1;
    }

    /// The current generation, to be passed back to [`insert`](Self::insert).
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total cost of all entries.
    pub fn cost(&self) -> usize {
        self.lock().cost
    }

    /// Maximum total cost.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            entries: state.entries.len(),
            cost: state.cost,
            capacity: self.capacity,
            hits: state.hits,
            misses: state.misses,
        }
    }
}
