#![allow(missing_docs, clippy::missing_docs_in_private_items, clippy::unwrap_used)]

use std::collections::HashMap;

use proptest::{collection::vec, prelude::*};
use sifthash::{ChainedHashMap, Heap, KeyValueMap, ProbingHashMap, is_heap};

fn sorted_for(mut values: Vec<i64>, is_max: bool) -> Vec<i64> {
    values.sort_unstable();
    if is_max {
        values.reverse();
    }
    values
}

proptest! {
    #[test]
    fn test_construction_keeps_heap_property(
        values in vec(any::<i64>(), 0..64),
        is_max in any::<bool>(),
    ) {
        let heap = Heap::new(is_max, values.iter().copied());
        prop_assert!(is_heap(heap.output(), is_max));
        prop_assert_eq!(heap.len(), values.len());
    }

    #[test]
    fn test_poll_yields_sorted_values(
        values in vec(-100_i64..100, 0..64),
        is_max in any::<bool>(),
    ) {
        let mut heap = Heap::new(is_max, values.iter().copied());
        let mut polled = Vec::new();
        while let Some(value) = heap.poll() {
            prop_assert!(is_heap(heap.output(), is_max));
            polled.push(value);
        }
        prop_assert_eq!(heap.poll(), None);
        prop_assert_eq!(polled, sorted_for(values, is_max));
    }

    #[test]
    fn test_insert_then_remove_restores_heap(
        values in vec(0_i64..1_000, 0..64),
        is_max in any::<bool>(),
    ) {
        // Out of the generated range, so the inserted value is unique
        let extra = 5_000;
        let mut heap = Heap::new(is_max, values.iter().copied());
        heap.insert(extra);
        heap.remove(extra);

        prop_assert!(is_heap(heap.output(), is_max));
        prop_assert_eq!(heap.into_sorted_vec(), sorted_for(values, is_max));
    }

    #[test]
    fn test_remove_keeps_heap_property(
        values in vec(-20_i64..20, 1..64),
        removals in vec(-25_i64..25, 0..32),
        is_max in any::<bool>(),
    ) {
        let mut heap = Heap::new(is_max, values.iter().copied());
        let mut expected = values;
        for value in removals {
            let before = heap.output().to_vec();
            heap.remove(value);
            if let Some(position) = expected.iter().position(|&kept| kept == value) {
                expected.swap_remove(position);
            } else {
                prop_assert_eq!(heap.output(), before.as_slice());
            }
            prop_assert!(is_heap(heap.output(), is_max));
        }
        prop_assert_eq!(heap.into_sorted_vec(), sorted_for(expected, is_max));
    }

    #[test]
    fn test_chained_map_matches_model(
        pairs in vec(("[a-c]{1,3}", "[a-z]{0,4}"), 0..64),
    ) {
        let mut map = ChainedHashMap::new();
        let mut model = HashMap::new();
        for (key, value) in pairs {
            let previous = map.set(key.clone(), value.clone()).unwrap();
            prop_assert_eq!(previous, model.insert(key, value));
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value.as_str()));
        }
        prop_assert_eq!(map.get("zzzz"), None);
    }

    #[test]
    fn test_probing_map_matches_model(
        pairs in vec(("[a-c]{1,3}", "[a-z]{0,4}"), 0..64),
    ) {
        // Short lowercase keys hash well below the last bucket, so nothing is rejected
        let mut map = ProbingHashMap::new();
        let mut model = HashMap::new();
        for (key, value) in pairs {
            let previous = map.set(key.clone(), value.clone()).unwrap();
            prop_assert_eq!(previous, model.insert(key, value));
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value.as_str()));
        }
        prop_assert_eq!(map.get("zzzz"), None);
    }

    #[test]
    fn test_probing_rejection_leaves_map_unchanged(
        keys in vec("[ -~]{1,6}", 0..300),
    ) {
        let mut map = ProbingHashMap::new();
        let mut model = HashMap::new();
        for key in keys {
            match map.set(key.clone(), key.clone()) {
                Ok(_) => {
                    model.insert(key.clone(), key);
                }
                Err(error) => {
                    prop_assert_eq!(&error.key, &key);
                    prop_assert!(!model.contains_key(&key));
                    prop_assert_eq!(map.get(&key), None);
                }
            }
        }

        prop_assert_eq!(map.len(), model.len());
        for key in model.keys() {
            prop_assert_eq!(map.get(key), Some(key.as_str()));
        }
    }
}
