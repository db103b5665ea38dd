//! Recording and snapshotting are separate traits: caches write through
//! [`CoreMetricsRecorder`], tests and dashboards read through
//! [`MetricsSnapshotProvider`].

/// Counters shared by every eviction policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_update_miss(&mut self);
    fn record_eviction(&mut self);
    fn record_remove(&mut self, found: bool);
    fn record_clear(&mut self);
}

/// Point-in-time view of a cache's counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
