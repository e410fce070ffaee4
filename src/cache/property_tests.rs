//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check read, overwrite, delete and eviction behavior over
//! arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{ExpiringCache, Ttl};

// == Test Configuration ==
const TEST_THRESHOLD: usize = 500;
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys such as OAuth state or token identifiers
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,32}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back before expiration returns the same value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = ExpiringCache::new(TEST_THRESHOLD, TEST_DEFAULT_TTL);

        prop_assert!(store.set(key.clone(), value.clone()));
        prop_assert!(store.has(&key));
        prop_assert_eq!(store.get(&key), Some(value));
    }

    // A key that was never stored reads as absent.
    #[test]
    fn prop_absent_key(stored in key_strategy(), probe in key_strategy()) {
        prop_assume!(stored != probe);
        let mut store = ExpiringCache::new(TEST_THRESHOLD, TEST_DEFAULT_TTL);
        store.set(stored, "value".to_string());

        prop_assert!(!store.has(&probe));
        prop_assert!(store.get(&probe).is_none());
    }

    // After a successful delete the key is gone, and a second delete reports false.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut store = ExpiringCache::new(TEST_THRESHOLD, TEST_DEFAULT_TTL);
        store.set(key.clone(), value);

        prop_assert!(store.delete(&key));
        prop_assert!(!store.has(&key));
        prop_assert!(store.get(&key).is_none());
        prop_assert!(!store.delete(&key));
    }

    // The second of two writes to a key wins, and no residue of the first remains.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let mut store = ExpiringCache::new(TEST_THRESHOLD, TEST_DEFAULT_TTL);
        store.set_with_ttl(key.clone(), first, Ttl::After(Duration::from_secs(1)));
        store.set_with_ttl(key.clone(), second.clone(), Ttl::Never);

        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.ttl_remaining(&key), Some(None));
    }

    // The store never holds more than threshold + 1 entries, and once a pass has
    // run it holds fewer entries than were inserted.
    #[test]
    fn prop_eviction_bound(threshold in 0usize..40, inserts in 1usize..200) {
        let mut store = ExpiringCache::new(threshold, Duration::ZERO);

        for i in 0..inserts {
            store.set_with_ttl(format!("key_{i}"), i, Ttl::Never);
            prop_assert!(store.len() <= threshold + 1, "size {} over bound", store.len());
        }

        prop_assert!(!store.is_empty());
        if store.stats().prune_passes > 0 {
            prop_assert!(store.len() < inserts);
        }
    }

    // Reads agree with a plain map when nothing expires and nothing is evicted.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = ExpiringCache::new(TEST_THRESHOLD, TEST_DEFAULT_TTL);
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(&key).cloned();
                    if expected.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    prop_assert_eq!(store.get(&key), expected);
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // Clear removes everything, never-expiring entries included.
    #[test]
    fn prop_clear_removes_all(keys in prop::collection::hash_set(key_strategy(), 1..30)) {
        let mut store = ExpiringCache::new(TEST_THRESHOLD, TEST_DEFAULT_TTL);
        for (i, key) in keys.iter().enumerate() {
            let ttl = if i % 2 == 0 { Ttl::Never } else { Ttl::Default };
            store.set_with_ttl(key.clone(), i, ttl);
        }

        store.clear();

        for key in &keys {
            prop_assert!(!store.has(key));
        }
        prop_assert!(store.is_empty());
    }
}
