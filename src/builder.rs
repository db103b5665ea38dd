//! Cache construction from configuration values.
//!
//! Each component that needs a cache builds its own, one per cached entity
//! type, choosing capacity and eviction policy explicitly:
//!
//! ```rust
//! use entity_cache::builder::CacheBuilder;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Smartphone { model: String }
//!
//! let phones = CacheBuilder::new(100).try_build_lru::<u64, Smartphone>().unwrap();
//! phones.put(7, Smartphone { model: "Pixel 9".into() });
//! assert_eq!(phones.get(&7).map(|p| p.model), Some("Pixel 9".to_string()));
//!
//! // capacity validation is deferred to the build step
//! assert!(CacheBuilder::new(0).try_build_lru::<u64, Smartphone>().is_err());
//! ```

use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::cache::local::validate_capacity;
use crate::cache::{BoundedCache, BoundedLfuCache, BoundedLruCache, CacheCore};
use crate::error::ConfigError;
use crate::policy::{EvictionPolicy, LfuPolicy, LruPolicy};

/// Builder for bounded caches.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: Result<NonZeroUsize, ConfigError>,
}

impl CacheBuilder {
    /// Starts a builder; an invalid capacity is reported by the `try_build*`
    /// methods.
    pub fn new<C>(capacity: C) -> Self
    where
        C: TryInto<usize>,
    {
        Self {
            capacity: validate_capacity(capacity),
        }
    }

    /// Builds a shareable cache with policy `P`.
    pub fn try_build<K, V, P>(self) -> Result<BoundedCache<K, V, P>, ConfigError>
    where
        K: Eq + Hash + Clone,
        P: EvictionPolicy<K, V> + Default,
    {
        self.capacity.map(BoundedCache::new)
    }

    pub fn try_build_lru<K, V>(self) -> Result<BoundedLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build::<K, V, LruPolicy>()
    }

    pub fn try_build_lfu<K, V>(self) -> Result<BoundedLfuCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build::<K, V, LfuPolicy>()
    }

    /// Builds an unsynchronized core for single-threaded owners.
    pub fn try_build_local<K, V, P>(self) -> Result<CacheCore<K, V, P>, ConfigError>
    where
        K: Eq + Hash + Clone,
        P: EvictionPolicy<K, V> + Default,
    {
        self.capacity.map(CacheCore::new)
    }
}
