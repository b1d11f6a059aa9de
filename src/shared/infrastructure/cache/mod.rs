// In-process cache region: an LRU map with a time-to-live and a generation counter.
//
// Purpose
// - Hold derived read results close to the service so repeated reads skip the store.
//
// Responsibilities
// - Bound every region by entry count (LRU eviction) and by age (TTL).
// - Guard each region with its own lock; no lock is held across an await.
// - Refuse lazy populates that raced with an invalidation, using the region generation.
//
// Generation discipline
// - The region keeps one write counter. Every write-through, burial and clear takes a fresh
//   value from it, and each entry remembers the value it was written under.
// - A reader takes the counter before it goes to the store and hands it back when it
//   populates. The populate is dropped if the region was cleared since, or if its own key was
//   written or buried since. Writes to other keys do not affect it.
// - A buried key holds a tombstone: reads miss, and neither populates nor write-throughs can
//   bring a value back until the tombstone expires.

use lru::LruCache;
use parking_lot::Mutex;
use std::future::Future;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 1000;
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheConfigError {
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: DEFAULT_TTL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Opaque snapshot of a region's write counter, handed back to [`RegionCache::populate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

struct Entry<V> {
    // None marks a buried key.
    value: Option<V>,
    written_at: u64,
    inserted_at: Instant,
}

struct Region<K: Hash + Eq, V> {
    entries: LruCache<K, Entry<V>>,
    counter: u64,
    cleared_at: u64,
}

impl<K: Hash + Eq, V> Region<K, V> {
    fn next_write(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    fn store(&mut self, key: K, value: Option<V>) {
        let written_at = self.next_write();
        self.entries.put(
            key,
            Entry {
                value,
                written_at,
                inserted_at: Instant::now(),
            },
        );
    }
}

pub struct RegionCache<K: Hash + Eq, V> {
    name: &'static str,
    ttl: Duration,
    inner: Mutex<Region<K, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Hash + Eq, V: Clone> RegionCache<K, V> {
    pub fn new(name: &'static str, config: CacheConfig) -> Result<Self, CacheConfigError> {
        let capacity = NonZeroUsize::new(config.capacity).ok_or(CacheConfigError::ZeroCapacity)?;
        Ok(Self {
            name,
            ttl: config.ttl,
            inner: Mutex::new(Region {
                entries: LruCache::new(capacity),
                counter: 0,
                cleared_at: 0,
            }),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let mut region = self.inner.lock();
        let expired = match region.entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => match &entry.value {
                Some(value) => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!(region = self.name, "cache hit");
                    return Some(value.clone());
                }
                None => false,
            },
            Some(_) => true,
            None => false,
        };
        if expired {
            region.entries.pop(key);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(region = self.name, expired, "cache miss");
        None
    }

    pub fn generation(&self) -> Generation {
        Generation(self.inner.lock().counter)
    }

    /// Inserts a value computed by a reader. Returns false when the region was cleared, or
    /// `key` was written or buried, after `seen` was taken; the value is then dropped.
    pub fn populate(&self, key: K, value: V, seen: Generation) -> bool {
        let mut region = self.inner.lock();
        let key_moved = region
            .entries
            .peek(&key)
            .is_some_and(|entry| entry.value.is_none() || entry.written_at > seen.0);
        if region.cleared_at > seen.0 || key_moved {
            debug!(region = self.name, "discarding populate that raced an invalidation");
            return false;
        }
        region.store(key, Some(value));
        true
    }

    /// Write-through insert. Keeps the cached value when `keep_existing` says it is fresher,
    /// and never replaces a tombstone.
    pub fn put_unless(&self, key: K, value: V, keep_existing: impl FnOnce(&V) -> bool) -> bool {
        let mut region = self.inner.lock();
        let keep = region
            .entries
            .peek(&key)
            .is_some_and(|existing| existing.value.as_ref().is_none_or(keep_existing));
        if keep {
            debug!(region = self.name, "keeping the cached entry over a write-through");
            return false;
        }
        region.store(key, Some(value));
        true
    }

    pub fn put(&self, key: K, value: V) {
        self.put_unless(key, value, |_| false);
    }

    /// Drops the value for `key` and leaves a tombstone behind.
    pub fn bury(&self, key: K) {
        self.inner.lock().store(key, None);
    }

    pub fn clear(&self) {
        let mut region = self.inner.lock();
        let cleared_at = region.next_write();
        region.cleared_at = cleared_at;
        region.entries.clear();
        debug!(region = self.name, "cache cleared");
    }

    /// Read-through: returns the cached value or runs `load` and populates with its result.
    pub async fn get_or_load<E, F, Fut>(&self, key: K, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let seen = self.generation();
        let value = load().await?;
        self.populate(key, value.clone(), seen);
        Ok(value)
    }

    pub fn stats(&self) -> CacheStats {
        let region = self.inner.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: region
                .entries
                .iter()
                .filter(|(_, entry)| entry.value.is_some())
                .count(),
        }
    }
}
