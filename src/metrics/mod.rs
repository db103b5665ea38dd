//! Optional per-cache counters, enabled with the `metrics` feature.
//!
//! Recording happens inside cache operations while the cache lock is held,
//! so counters are plain integers. Consumers read them through
//! [`MetricsSnapshotProvider`](traits::MetricsSnapshotProvider).

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::CacheMetrics;
pub use snapshot::CacheMetricsSnapshot;
pub use traits::{CoreMetricsRecorder, MetricsSnapshotProvider};
