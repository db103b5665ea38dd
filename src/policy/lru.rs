//! Strict least-recently-used eviction.
//!
//! ```text
//!   Before (capacity = 3):
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!              MRU                LRU
//!
//!   put(D):
//!     1. pick_victim → [C] (tail)
//!     2. link [D] at head
//!
//!   After:
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//! ```
//!
//! No frequency weighting and no sampling: the tail always goes.

use crate::cache::Entry;
use crate::ds::{RecencyList, SlotId};
use crate::policy::EvictionPolicy;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruPolicy;

impl<K, V> EvictionPolicy<K, V> for LruPolicy {
    const NAME: &'static str = "lru";

    #[inline]
    fn pick_victim(&self, entries: &RecencyList<Entry<K, V>>) -> Option<SlotId> {
        entries.back_id()
    }
}
