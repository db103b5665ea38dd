//! Bounded caches: the single-threaded [`CacheCore`] and the shareable
//! [`BoundedCache`] that guards one behind a mutex.

mod entry;
pub mod local;
pub mod shared;

pub use entry::Entry;
pub use local::CacheCore;
pub use shared::{BoundedCache, BoundedLfuCache, BoundedLruCache};
