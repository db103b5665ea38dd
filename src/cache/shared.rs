//! Thread-safe bounded cache.
//!
//! ## Concurrency Model
//!
//! ```text
//!   Thread 1           Thread 2           Thread 3
//!      │                  │                  │
//!      │ get(7)           │ size()           │ put(9, v)
//!      ▼                  ▼                  ▼
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                 parking_lot::Mutex                       │
//!   │                                                          │
//!   │  every operation takes the lock exclusively, reads too:  │
//!   │  get() reorders recency, so no reader/writer split       │
//!   └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────┐
//!   │  CacheCore (index + recency list + policy)               │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations are O(1) (plus the policy's victim pick), never block on I/O,
//! and are linearizable in lock-acquisition order. Values are cloned out
//! while the lock is held, so callers never alias cached state; store
//! `Arc<T>` as the value type to make those clones cheap.
//!
//! Callers that miss should load from the source of truth *outside* any
//! cache call and then `put` the result.

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::local::{validate_capacity, CacheCore};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetricsSnapshot, MetricsSnapshotProvider};
use crate::policy::{EvictionPolicy, LfuPolicy, LruPolicy};
use crate::traits::{ConcurrentCache, CoreCache, MutableCache};

/// Bounded, mutex-guarded cache handle.
///
/// Cloning the handle shares the same underlying cache.
pub struct BoundedCache<K, V, P = LruPolicy> {
    inner: Arc<Mutex<CacheCore<K, V, P>>>,
}

/// Strict recency eviction: a full cache drops its least recently used entry.
pub type BoundedLruCache<K, V> = BoundedCache<K, V, LruPolicy>;

/// Frequency eviction: a full cache drops its least frequently used entry.
pub type BoundedLfuCache<K, V> = BoundedCache<K, V, LfuPolicy>;

impl<K, V, P> BoundedCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use entity_cache::BoundedLruCache;
    ///
    /// let cache: BoundedLruCache<u64, String> =
    ///     BoundedLruCache::new(NonZeroUsize::new(100).unwrap());
    /// assert_eq!(cache.capacity(), 100);
    /// assert_eq!(cache.size(), 0);
    /// ```
    pub fn new(capacity: NonZeroUsize) -> Self
    where
        P: Default,
    {
        Self::from_core(CacheCore::new(capacity))
    }

    /// Validating constructor; zero and negative capacities fail with
    /// [`ConfigError::InvalidCapacity`] and no cache is produced.
    ///
    /// ```
    /// use entity_cache::error::ConfigError;
    /// use entity_cache::BoundedLruCache;
    ///
    /// assert!(BoundedLruCache::<u64, String>::try_new(8).is_ok());
    /// assert_eq!(
    ///     BoundedLruCache::<u64, String>::try_new(0).err(),
    ///     Some(ConfigError::InvalidCapacity)
    /// );
    /// assert_eq!(
    ///     BoundedLruCache::<u64, String>::try_new(-5).err(),
    ///     Some(ConfigError::InvalidCapacity)
    /// );
    /// ```
    pub fn try_new<C>(capacity: C) -> Result<Self, ConfigError>
    where
        C: TryInto<usize>,
        P: Default,
    {
        Ok(Self::new(validate_capacity(capacity)?))
    }

    pub fn with_policy(capacity: NonZeroUsize, policy: P) -> Self {
        Self::from_core(CacheCore::with_policy(capacity, policy))
    }

    fn from_core(core: CacheCore<K, V, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(core)),
        }
    }

    /// Returns a clone of the cached value and promotes the entry.
    ///
    /// ```
    /// use entity_cache::BoundedLruCache;
    ///
    /// let cache = BoundedLruCache::try_new(2).unwrap();
    /// cache.put(1, "a");
    /// cache.put(2, "b");
    /// assert_eq!(cache.get(&1), Some("a"));
    /// cache.put(3, "c"); // 2 is now least recently used
    /// assert_eq!(cache.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Returns a clone of the cached value without promoting it.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Inserts or replaces `key`, evicting one entry if a new key arrives at
    /// a full cache. Returns the replaced value, if any.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Replaces the value of a cached key; absent keys stay absent.
    pub fn update(&self, key: &K, value: V) -> Option<V> {
        self.inner.lock().update(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Number of live entries.
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Access count of `key`.
    pub fn hits(&self, key: &K) -> Option<u64> {
        self.inner.lock().hits(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Clones every cached value, most recently used first.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner
            .lock()
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Clones every `(key, value)` pair, most recently used first.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.inner
            .lock()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Evicts the entry the policy would pick next.
    pub fn pop_victim(&self) -> Option<(K, V)> {
        self.inner.lock().pop_victim()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }
}

impl<K, V, P> Clone for BoundedCache<K, V, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, P> fmt::Debug for BoundedCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("BoundedCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .field("policy", cache.policy())
            .finish()
    }
}

impl<K, V, P> ConcurrentCache for BoundedCache<K, V, P>
where
    K: Send,
    V: Send,
    P: Send,
{
}

#[cfg(feature = "metrics")]
impl<K, V, P> MetricsSnapshotProvider<CacheMetricsSnapshot> for BoundedCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}
