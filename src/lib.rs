//! entity-cache: bounded, thread-safe caches for repeated entity lookups.
//!
//! A cache sits in front of a persistence layer. On a miss the caller loads
//! the authoritative value and `put`s it; after committing a write the caller
//! `put`s, `update`s or `remove`s the key. The cache never refreshes or
//! expires entries on its own.
//!
//! ```
//! use entity_cache::BoundedLruCache;
//!
//! let users: BoundedLruCache<u64, String> = BoundedLruCache::try_new(2).unwrap();
//! users.put(1, "ada".into());
//! users.put(2, "grace".into());
//! users.get(&1);
//! users.put(3, "edsger".into()); // evicts 2
//!
//! assert_eq!(users.get(&2), None);
//! assert_eq!(users.size(), 2);
//! ```
//!
//! - [`cache`]: [`CacheCore`](cache::CacheCore) (single-threaded) and
//!   [`BoundedCache`](cache::BoundedCache) (one mutex around a core).
//! - [`policy`]: eviction strategies, [`LruPolicy`](policy::LruPolicy) and
//!   [`LfuPolicy`](policy::LfuPolicy).
//! - [`ds`]: slot arena and arena-backed recency list.
//! - [`builder`]: construction from configuration values.

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod policy;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;

pub use cache::{BoundedCache, BoundedLfuCache, BoundedLruCache};
pub use error::ConfigError;
