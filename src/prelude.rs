pub use crate::builder::CacheBuilder;
pub use crate::cache::{BoundedCache, BoundedLfuCache, BoundedLruCache, CacheCore, Entry};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::{EvictionPolicy, LfuPolicy, LruPolicy};
pub use crate::traits::{ConcurrentCache, CoreCache, MutableCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::{CacheMetricsSnapshot, MetricsSnapshotProvider};
