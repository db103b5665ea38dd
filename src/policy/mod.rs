//! Eviction policies.
//!
//! A cache owns its entries and their recency order; a policy only decides
//! *which* entry leaves when a new key arrives at a full cache. Keeping the
//! decision behind [`EvictionPolicy`] lets one container serve both strict
//! recency eviction and frequency eviction.
//!
//! | Policy        | Victim                                   | Cost |
//! |---------------|------------------------------------------|------|
//! | [`LruPolicy`] | Tail of the recency list                 | O(1) |
//! | [`LfuPolicy`] | Fewest hits; ties go to least recent     | O(n) |

pub mod lfu;
pub mod lru;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

use crate::cache::Entry;
use crate::ds::{RecencyList, SlotId};

/// Chooses the entry to evict from a full cache.
///
/// The cache calls `pick_victim` before linking an absent key into a full
/// cache, and on every explicit `pop_victim`, which may run at any size,
/// including on an empty list. Returning `None`, or an id that is not in
/// `entries`, makes the cache evict the least recently used entry instead.
pub trait EvictionPolicy<K, V> {
    /// Short policy name used in log events.
    const NAME: &'static str;

    fn pick_victim(&self, entries: &RecencyList<Entry<K, V>>) -> Option<SlotId>;
}
