//! Single-threaded bounded cache core.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────┐
//!   │                       CacheCore<K, V, P>                        │
//!   │                                                                 │
//!   │   index: FxHashMap<K, SlotId>                                   │
//!   │   ┌─────────┬────────┐                                          │
//!   │   │  key 7  │ id_2 ──┼──────────────┐                           │
//!   │   │  key 3  │ id_0 ──┼───────┐      │                           │
//!   │   └─────────┴────────┘       │      │                           │
//!   │                              ▼      ▼                           │
//!   │   entries: RecencyList<Entry<K, V>>                             │
//!   │     head ──► [id_2: 7] ◄──► [id_0: 3] ◄── tail                  │
//!   │              MRU                 LRU                            │
//!   │                                                                 │
//!   │   policy: P (picks the victim when full)                        │
//!   └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every key in `index` maps to exactly one live slot in `entries` and
//! every live slot's key is in `index`. `len() <= capacity()` always holds.
//!
//! ## Operations
//!
//! | Method        | Complexity | Recency effect          |
//! |---------------|------------|-------------------------|
//! | `insert`      | O(1)*      | new/updated key → MRU   |
//! | `get`         | O(1)       | hit → MRU               |
//! | `update`      | O(1)       | hit → MRU, never inserts|
//! | `peek`        | O(1)       | none                    |
//! | `remove`      | O(1)       | unlinks                 |
//! | `pop_victim`  | policy     | unlinks victim          |
//! | `iter`        | O(n)       | none (MRU → LRU)        |
//!
//! \* plus the policy's `pick_victim` when the cache is full.

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::cache::Entry;
use crate::ds::{RecencyList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{
    CacheMetrics, CacheMetricsSnapshot, CoreMetricsRecorder, MetricsSnapshotProvider,
};
use crate::policy::{EvictionPolicy, LruPolicy};
use crate::traits::{CoreCache, MutableCache};

/// Bounded key/value cache ordered by recency, without internal locking.
///
/// Use [`BoundedCache`](crate::cache::BoundedCache) to share one across
/// threads.
///
/// # Example
///
/// ```
/// use entity_cache::cache::CacheCore;
/// use entity_cache::traits::CoreCache;
///
/// let mut cache: CacheCore<u64, &str> = CacheCore::try_new(2).unwrap();
/// cache.insert(1, "a");
/// cache.insert(2, "b");
/// cache.get(&1);
/// cache.insert(3, "c"); // evicts 2, the least recently used
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// ```
pub struct CacheCore<K, V, P = LruPolicy> {
    index: FxHashMap<K, SlotId>,
    entries: RecencyList<Entry<K, V>>,
    capacity: NonZeroUsize,
    policy: P,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V, P> CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
{
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self
    where
        P: Default,
    {
        Self::with_policy(capacity, P::default())
    }

    /// Validating constructor for capacities from configuration or callers.
    ///
    /// Zero, negative, and values that do not fit in `usize` are rejected
    /// with [`ConfigError::InvalidCapacity`].
    ///
    /// ```
    /// use entity_cache::cache::CacheCore;
    /// use entity_cache::error::ConfigError;
    ///
    /// assert!(CacheCore::<u64, u64>::try_new(16).is_ok());
    /// assert_eq!(
    ///     CacheCore::<u64, u64>::try_new(0).err(),
    ///     Some(ConfigError::InvalidCapacity)
    /// );
    /// assert!(CacheCore::<u64, u64>::try_new(-3i64).is_err());
    /// ```
    pub fn try_new<C>(capacity: C) -> Result<Self, ConfigError>
    where
        C: TryInto<usize>,
        P: Default,
    {
        Ok(Self::new(validate_capacity(capacity)?))
    }

    pub fn with_policy(capacity: NonZeroUsize, policy: P) -> Self {
        debug!(
            policy = P::NAME,
            capacity = capacity.get(),
            "initialized bounded cache"
        );
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity.get(), Default::default()),
            entries: RecencyList::with_capacity(capacity.get()),
            capacity,
            policy,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the value for `key` without touching recency or hit counts.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(Entry::value)
    }

    /// Access count of `key`: 1 on insert, +1 per hit or in-place write.
    pub fn hits(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(Entry::hits)
    }

    /// Replaces the value of a cached key and promotes it; absent keys are
    /// left absent.
    pub fn update(&mut self, key: &K, value: V) -> Option<V> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_update_miss();
            trace!(policy = P::NAME, "update skipped: key not cached");
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_update();
        self.replace_at(id, value)
    }

    /// Iterates `(key, value)` from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|entry| (entry.key(), entry.value()))
    }

    /// Evicts the entry the policy picks, regardless of fullness.
    ///
    /// A pick that is `None` or names a slot no longer in the list falls
    /// back to the least recently used entry, so a non-empty cache always
    /// gives up one entry.
    pub fn pop_victim(&mut self) -> Option<(K, V)> {
        let id = self
            .policy
            .pick_victim(&self.entries)
            .filter(|id| self.entries.contains(*id))
            .or_else(|| self.entries.back_id())?;
        let entry = self.entries.remove(id)?;
        self.index.remove(entry.key());
        #[cfg(feature = "metrics")]
        self.metrics.record_eviction();
        debug!(
            policy = P::NAME,
            len = self.entries.len(),
            capacity = self.capacity.get(),
            "evicted entry"
        );
        Some(entry.into_parts())
    }

    /// Verifies that the index and the recency list describe the same entries.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.entries.check_links()?;

        if self.index.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.entries.len()
            )));
        }
        if self.entries.len() > self.capacity.get() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.entries.len(),
                self.capacity
            )));
        }
        for (id, entry) in self.entries.iter_entries() {
            if self.index.get(entry.key()) != Some(&id) {
                return Err(InvariantError::new(format!(
                    "slot {} is not indexed under its own key",
                    id.index()
                )));
            }
        }
        Ok(())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot::capture(&self.metrics, self.entries.len(), self.capacity.get())
    }

    fn replace_at(&mut self, id: SlotId, value: V) -> Option<V> {
        self.entries.move_to_front(id);
        trace!(policy = P::NAME, "updated cached value");
        self.entries.get_mut(id).map(|entry| entry.replace(value))
    }
}

impl<K, V, P> CoreCache<K, V> for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return self.replace_at(id, value);
        }

        if self.entries.len() >= self.capacity.get() {
            self.pop_victim();
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
        let id = self.entries.push_front(Entry::new(key.clone(), value));
        self.index.insert(key, id);
        trace!(
            policy = P::NAME,
            len = self.entries.len(),
            "inserted new entry"
        );
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            trace!(policy = P::NAME, "cache miss");
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();
        trace!(policy = P::NAME, "cache hit");
        self.entries.move_to_front(id);
        let entry = self.entries.get_mut(id)?;
        entry.touch();
        Some(entry.value())
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity.get()
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        debug!(policy = P::NAME, dropped = self.entries.len(), "cleared cache");
        self.index.clear();
        self.entries.clear();
    }
}

impl<K, V, P> MutableCache<K, V> for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self
            .index
            .remove(key)
            .and_then(|id| self.entries.remove(id))
            .map(|entry| entry.into_parts().1);
        #[cfg(feature = "metrics")]
        self.metrics.record_remove(removed.is_some());
        trace!(policy = P::NAME, found = removed.is_some(), "removed key");
        removed
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> MetricsSnapshotProvider<CacheMetricsSnapshot> for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V, P> fmt::Debug for CacheCore<K, V, P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheCore")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

pub(crate) fn validate_capacity<C>(capacity: C) -> Result<NonZeroUsize, ConfigError>
where
    C: TryInto<usize>,
{
    capacity
        .try_into()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(ConfigError::InvalidCapacity)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::policy::LfuPolicy;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u16),
        Get(u8),
        Update(u8, u16),
        Remove(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u8..24, any::<u16>()).prop_map(|(k, v)| Op::Insert(k, v)),
            3 => (0u8..24).prop_map(Op::Get),
            1 => (0u8..24, any::<u16>()).prop_map(|(k, v)| Op::Update(k, v)),
            1 => (0u8..24).prop_map(Op::Remove),
        ]
    }

    /// Reference model: MRU-first deque of (key, value).
    #[derive(Default)]
    struct Model {
        order: VecDeque<(u8, u16)>,
    }

    impl Model {
        fn position(&self, key: u8) -> Option<usize> {
            self.order.iter().position(|(k, _)| *k == key)
        }

        fn promote(&mut self, key: u8) -> Option<u16> {
            let idx = self.position(key)?;
            let pair = self.order.remove(idx)?;
            self.order.push_front(pair);
            Some(pair.1)
        }
    }

    proptest! {
        /// Property: the cache matches a naive MRU-ordered model step for step
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_lru_matches_model(
            capacity in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut cache: CacheCore<u8, u16> = CacheCore::try_new(capacity).unwrap();
            let mut model = Model::default();

            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        let expected = model.promote(k);
                        match expected {
                            Some(_) => model.order[0].1 = v,
                            None => {
                                if model.order.len() == capacity {
                                    model.order.pop_back();
                                }
                                model.order.push_front((k, v));
                            },
                        }
                        prop_assert_eq!(cache.insert(k, v), expected);
                    },
                    Op::Get(k) => {
                        prop_assert_eq!(cache.get(&k).copied(), model.promote(k));
                    },
                    Op::Update(k, v) => {
                        let expected = model.promote(k);
                        if expected.is_some() {
                            model.order[0].1 = v;
                        }
                        prop_assert_eq!(cache.update(&k, v), expected);
                    },
                    Op::Remove(k) => {
                        let expected = model
                            .position(k)
                            .and_then(|idx| model.order.remove(idx))
                            .map(|(_, v)| v);
                        prop_assert_eq!(cache.remove(&k), expected);
                    },
                }

                prop_assert!(cache.check_invariants().is_ok());
                let actual: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
                let expected: Vec<_> = model.order.iter().copied().collect();
                prop_assert_eq!(actual, expected);
            }
        }

        /// Property: invariants hold under frequency eviction too
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_lfu_invariants_hold(
            capacity in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut cache: CacheCore<u8, u16, LfuPolicy> = CacheCore::try_new(capacity).unwrap();

            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        cache.insert(k, v);
                        prop_assert!(cache.contains(&k));
                    },
                    Op::Get(k) => {
                        cache.get(&k);
                    },
                    Op::Update(k, v) => {
                        cache.update(&k, v);
                    },
                    Op::Remove(k) => {
                        cache.remove(&k);
                        prop_assert!(!cache.contains(&k));
                    },
                }
                prop_assert!(cache.len() <= capacity);
                prop_assert!(cache.check_invariants().is_ok());
            }
        }
    }
}
