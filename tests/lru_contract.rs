// ==============================================
// BOUNDED LRU CONTRACT TESTS (integration)
// ==============================================
//
// Behavioural contract of BoundedLruCache as seen by a caller that keeps
// one cache per entity type in front of its repository.

use entity_cache::error::ConfigError;
use entity_cache::BoundedLruCache;

fn cache(capacity: usize) -> BoundedLruCache<u64, &'static str> {
    BoundedLruCache::try_new(capacity).unwrap()
}

// ==============================================
// Construction
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let result = BoundedLruCache::<u64, String>::try_new(0);
        assert_eq!(result.err(), Some(ConfigError::InvalidCapacity));
    }

    #[test]
    fn negative_capacity_is_rejected() {
        for capacity in [-1i64, -100, i64::MIN] {
            let result = BoundedLruCache::<u64, String>::try_new(capacity);
            assert_eq!(
                result.err(),
                Some(ConfigError::InvalidCapacity),
                "capacity {} should be rejected",
                capacity
            );
        }
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = cache(5);
        assert_eq!(cache.size(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 5);
    }
}

// ==============================================
// Eviction and recency
// ==============================================

mod eviction {
    use super::*;

    #[test]
    fn strict_lru_eviction() {
        let cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some("b"));
        assert_eq!(cache.get(&3), Some("c"));
    }

    #[test]
    fn access_refreshes_recency() {
        let cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.get(&1);
        cache.put(3, "c");

        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some("a"));
        assert_eq!(cache.get(&3), Some("c"));
    }

    #[test]
    fn keeps_only_most_recent_distinct_keys() {
        let capacity = 4;
        let cache: BoundedLruCache<u64, u64> = BoundedLruCache::try_new(capacity).unwrap();
        let sequence = [5u64, 1, 5, 2, 3, 1, 9, 7, 2, 2, 8];
        for key in sequence {
            cache.put(key, key * 10);
            assert!(cache.size() <= capacity);
        }

        // last four distinct keys touched, newest first
        let keys: Vec<_> = cache.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![8, 2, 7, 9]);
    }

    #[test]
    fn repeated_get_is_idempotent() {
        let cache = cache(3);
        cache.put(1, "a");
        cache.put(2, "b");

        for _ in 0..10 {
            assert_eq!(cache.get(&2), Some("b"));
            assert_eq!(cache.size(), 2);
        }
    }

    #[test]
    fn update_in_place_uses_one_slot() {
        let cache = cache(2);
        cache.put(1, "a");
        assert_eq!(cache.put(1, "b"), Some("a"));

        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get(&1), Some("b"));
    }
}

// ==============================================
// Removal and explicit invalidation
// ==============================================

mod removal {
    use super::*;

    #[test]
    fn remove_then_reinsert() {
        let cache = cache(2);
        cache.put(1, "a");
        assert_eq!(cache.remove(&1), Some("a"));
        assert_eq!(cache.get(&1), None);

        cache.put(1, "z");
        assert_eq!(cache.get(&1), Some("z"));
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let cache = cache(2);
        cache.put(1, "a");
        assert_eq!(cache.remove(&42), None);
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn update_only_touches_cached_keys() {
        let cache = cache(2);
        assert_eq!(cache.update(&1, "a"), None);
        assert!(!cache.contains(&1));

        cache.put(1, "a");
        assert_eq!(cache.update(&1, "b"), Some("a"));
        assert_eq!(cache.peek(&1), Some("b"));
    }

    #[test]
    fn clear_empties_and_keeps_capacity() {
        let cache = cache(3);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.values().is_empty());
        assert_eq!(cache.capacity(), 3);
    }
}

// ==============================================
// Read-through usage
// ==============================================
//
// A repository stand-in: on miss, load outside the cache and put.

mod read_through {
    use super::*;
    use std::collections::HashMap;

    struct Repository {
        rows: HashMap<u64, String>,
        loads: usize,
    }

    impl Repository {
        fn find(&mut self, id: u64) -> Option<String> {
            self.loads += 1;
            self.rows.get(&id).cloned()
        }
    }

    fn find_cached(
        cache: &BoundedLruCache<u64, String>,
        repo: &mut Repository,
        id: u64,
    ) -> Option<String> {
        if let Some(hit) = cache.get(&id) {
            return Some(hit);
        }
        let loaded = repo.find(id)?;
        cache.put(id, loaded.clone());
        Some(loaded)
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let cache = BoundedLruCache::try_new(8).unwrap();
        let mut repo = Repository {
            rows: HashMap::from([(1, "Pixel 9".to_string()), (2, "Galaxy S24".to_string())]),
            loads: 0,
        };

        assert_eq!(find_cached(&cache, &mut repo, 1).as_deref(), Some("Pixel 9"));
        assert_eq!(find_cached(&cache, &mut repo, 1).as_deref(), Some("Pixel 9"));
        assert_eq!(repo.loads, 1);

        assert_eq!(find_cached(&cache, &mut repo, 3), None);
        assert!(!cache.contains(&3));
    }
}
