/// A cached key/value pair plus its access count.
///
/// Entries live in the recency list's arena; ordering links are owned by the
/// list, not by the entry.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    hits: u64,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            hits: 1,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Number of inserts, hits and updates this entry has seen.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub(crate) fn touch(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    /// Swaps in a new value, counting the write as an access.
    pub(crate) fn replace(&mut self, value: V) -> V {
        self.touch();
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
