use crate::metrics::traits::CoreMetricsRecorder;

#[derive(Debug, Default, Clone)]
pub struct CacheMetrics {
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub update_misses: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub clear_calls: u64,
}

impl CoreMetricsRecorder for CacheMetrics {
    #[inline]
    fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    #[inline]
    fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    #[inline]
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    #[inline]
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    #[inline]
    fn record_update_miss(&mut self) {
        self.update_misses += 1;
    }

    #[inline]
    fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    fn record_remove(&mut self, found: bool) {
        self.remove_calls += 1;
        if found {
            self.remove_found += 1;
        }
    }

    #[inline]
    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}
