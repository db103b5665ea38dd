//! # Cache Trait Hierarchy
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │                                         │
//!   │  remove(&mut, &K) → Option<V>           │
//!   │  remove_batch(&mut, &[K]) → Vec<..>     │
//!   └─────────────────────────────────────────┘
//!
//!   ConcurrentCache: marker for Send + Sync handles shared across threads
//! ```
//!
//! The single-threaded [`CacheCore`](crate::cache::CacheCore) implements
//! `CoreCache` and `MutableCache` and takes `&mut self` for anything that
//! reorders recency. [`BoundedCache`](crate::cache::BoundedCache) offers the
//! same operations through `&self` behind one lock and implements
//! `ConcurrentCache`.
//!
//! ## Example Usage
//!
//! ```
//! use entity_cache::cache::CacheCore;
//! use entity_cache::policy::LruPolicy;
//! use entity_cache::traits::{CoreCache, MutableCache};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, rows: &[(u64, &str)]) {
//!     for (id, name) in rows {
//!         cache.insert(*id, name.to_string());
//!     }
//! }
//!
//! fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, ids: &[u64]) {
//!     for id in ids {
//!         cache.remove(id);
//!     }
//! }
//!
//! let mut cache: CacheCore<u64, String, LruPolicy> = CacheCore::try_new(4).unwrap();
//! warm(&mut cache, &[(1, "pixel"), (2, "galaxy")]);
//! invalidate(&mut cache, &[1]);
//! assert_eq!(cache.len(), 1);
//! ```

/// Operations every cache supports.
pub trait CoreCache<K, V> {
    /// Inserts or replaces the value for `key`, returning the previous value.
    ///
    /// Inserting an absent key into a full cache evicts one entry first.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key` and records the access.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is cached. Does not record an access.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries; fixed at construction.
    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

/// Caches that allow removal of arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was cached.
    fn remove(&mut self, key: &K) -> Option<V>;

    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Marker for cache handles that are safe to share between threads.
///
/// ```
/// use entity_cache::traits::ConcurrentCache;
/// use entity_cache::BoundedLruCache;
///
/// fn assert_concurrent<C: ConcurrentCache>(_: &C) {}
///
/// let cache: BoundedLruCache<u64, String> = BoundedLruCache::try_new(8).unwrap();
/// assert_concurrent(&cache);
/// ```
pub trait ConcurrentCache: Send + Sync {}
