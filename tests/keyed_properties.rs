#![cfg(all(feature = "binary_tree", feature = "hash"))]
//! Property tests for the tree and map, checking their ordering and uniqueness guarantees against
//! `std` models.

use std::collections::{BTreeMap, BTreeSet};

use classic_collections::collections::hash::map::{DuplicateKey, KeyNotFound};
use classic_collections::{BinarySearchTree, CollectionError, HashMap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum MapOp {
    Add(u8, i32),
    Remove(u8),
    Get(u8),
    Clear,
}

fn map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (any::<u8>(), any::<i32>()).prop_map(|(key, value)| MapOp::Add(key, value)),
        3 => any::<u8>().prop_map(MapOp::Remove),
        3 => any::<u8>().prop_map(MapOp::Get),
        1 => Just(MapOp::Clear),
    ]
}

proptest! {
    /// In-order traversal is strictly ascending and visits exactly `len` values.
    #[test]
    fn prop_tree_in_order_is_sorted(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();
        let model: BTreeSet<i16> = values.into_iter().collect();

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.in_order().count(), tree.len());
        prop_assert!(tree.in_order().zip(tree.in_order().skip(1)).all(|(a, b)| a < b));
        prop_assert!(tree.in_order().eq(model.iter()));
        prop_assert_eq!(tree.pre_order().count(), tree.len());
        prop_assert_eq!(tree.post_order().count(), tree.len());
    }

    /// Removing a present value decrements `len` by exactly one, and leaves every other value.
    #[test]
    fn prop_tree_remove(
        values in prop::collection::vec(0_i32..100, 0..100),
        removals in prop::collection::vec(0_i32..100, 0..50)
    ) {
        let mut tree: BinarySearchTree<i32> = values.iter().copied().collect();
        let mut model: BTreeSet<i32> = values.into_iter().collect();

        for value in removals {
            let before = tree.len();
            let removed = tree.remove(&value);

            prop_assert_eq!(removed, model.remove(&value));
            prop_assert_eq!(tree.len(), if removed { before - 1 } else { before });
            prop_assert!(!tree.contains(&value));
        }

        prop_assert!(tree.iter().eq(model.iter()));
    }

    /// The map agrees with a BTreeMap under any mix of operations, never holding a key twice.
    #[test]
    fn prop_map_matches_model(ops in prop::collection::vec(map_op(), 0..300)) {
        let mut map = HashMap::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                MapOp::Add(key, value) => {
                    let expected = match model.contains_key(&key) {
                        true => Err(DuplicateKey),
                        false => {
                            model.insert(key, value);
                            Ok(())
                        },
                    };
                    prop_assert_eq!(map.add(key, value), expected);
                },
                MapOp::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key).is_some());
                },
                MapOp::Get(key) => {
                    prop_assert_eq!(map.get(&key).ok(), model.get(&key));
                    prop_assert_eq!(map.contains_key(&key), model.contains_key(&key));
                },
                MapOp::Clear => {
                    map.clear();
                    model.clear();
                },
            }
            prop_assert_eq!(map.len(), model.len());
        }

        let mut entries: Vec<_> = map.iter().map(|(key, value)| (*key, *value)).collect();
        entries.sort();
        prop_assert_eq!(entries, model.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_errors_convert_into_collection_error() {
    fn lookup(map: &HashMap<&str, i32>, key: &str) -> Result<i32, CollectionError> {
        Ok(*map.get(key)?)
    }

    let mut map = HashMap::new();
    map.add("present", 1).unwrap();

    assert_eq!(lookup(&map, "present"), Ok(1));
    assert_eq!(lookup(&map, "absent"), Err(CollectionError::KeyNotFound(KeyNotFound)));
    assert!(lookup(&map, "absent").unwrap_err().is_key_not_found());

    let added: Result<(), CollectionError> = map.add_optional(None, 2).map_err(Into::into);
    assert!(added.is_err_and(|err| err.is_null_key()));
}
