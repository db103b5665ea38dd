//! Least-frequently-used eviction over the recency list.
//!
//! Each entry counts its own accesses: insert sets the count to 1, and
//! every hit or in-place write adds 1. The victim is the entry with the
//! lowest count. Scanning starts at the tail, so among equal counts the
//! least recently used entry loses.
//!
//! The scan is O(n) per eviction. Lookups and updates stay O(1); only
//! inserts into a full cache pay for the scan.

use crate::cache::Entry;
use crate::ds::{RecencyList, SlotId};
use crate::policy::EvictionPolicy;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LfuPolicy;

impl<K, V> EvictionPolicy<K, V> for LfuPolicy {
    const NAME: &'static str = "lfu";

    fn pick_victim(&self, entries: &RecencyList<Entry<K, V>>) -> Option<SlotId> {
        // min_by_key keeps the first minimum, i.e. the one nearest the tail.
        entries
            .iter_entries_rev()
            .min_by_key(|(_, entry)| entry.hits())
            .map(|(id, _)| id)
    }
}
