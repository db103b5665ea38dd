use crate::metrics::metrics_impl::CacheMetrics;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CacheMetricsSnapshot {
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_new: u64,
    pub insert_updates: u64,
    pub update_misses: u64,

    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl CacheMetricsSnapshot {
    pub(crate) fn capture(metrics: &CacheMetrics, cache_len: usize, capacity: usize) -> Self {
        Self {
            get_hits: metrics.get_hits,
            get_misses: metrics.get_misses,
            insert_new: metrics.insert_new,
            insert_updates: metrics.insert_updates,
            update_misses: metrics.update_misses,
            evicted_entries: metrics.evicted_entries,
            remove_calls: metrics.remove_calls,
            remove_found: metrics.remove_found,
            clear_calls: metrics.clear_calls,
            cache_len,
            capacity,
        }
    }

    pub fn get_calls(&self) -> u64 {
        self.get_hits + self.get_misses
    }

    /// Fraction of `get` calls that hit; `0.0` before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        match self.get_calls() {
            0 => 0.0,
            calls => self.get_hits as f64 / calls as f64,
        }
    }
}
