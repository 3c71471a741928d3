//! Property-based tests for get/set round trips and merge laws

use jsondir::error::PathError;
use jsondir::tree::{get, set, set_with_policy, MergePolicy, Tree};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn key_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..5)
}

fn small_map() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(segment(), any::<i64>(), 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()
    })
}

proptest! {
    /// A value stored at a path reads back as the same type
    #[test]
    fn prop_get_after_set_round_trips(path in key_path(), n in any::<i64>(), s in ".*") {
        let mut tree = Tree::new();
        set(&mut tree, &path, n).unwrap();
        prop_assert_eq!(get::<i64, _>(&tree, &path).unwrap(), n);

        set(&mut tree, &path, s.clone()).unwrap();
        prop_assert_eq!(get::<String, _>(&tree, &path).unwrap(), s);
    }

    /// Asking for the wrong type fails with BadType naming both types
    #[test]
    fn prop_get_wrong_type_is_bad_type(path in key_path(), flag in any::<bool>()) {
        let mut tree = Tree::new();
        set(&mut tree, &path, flag).unwrap();

        match get::<String, _>(&tree, &path) {
            Err(PathError::BadType { actual, expected, .. }) => {
                prop_assert_eq!(actual, "bool");
                prop_assert_eq!(expected, "string");
            }
            other => prop_assert!(false, "expected BadType, got {:?}", other),
        }
    }

    /// Merging the same map twice leaves the tree as merging it once
    #[test]
    fn prop_merge_maps_is_idempotent(
        path in key_path(),
        existing in small_map(),
        incoming in small_map(),
    ) {
        let mut tree = Tree::new();
        set(&mut tree, &path, Value::Object(existing)).unwrap();

        set(&mut tree, &path, Value::Object(incoming.clone())).unwrap();
        let once = tree.clone();
        set(&mut tree, &path, Value::Object(incoming)).unwrap();

        prop_assert_eq!(tree, once);
    }

    /// Every key of the incoming map is present after a merge, with its value
    #[test]
    fn prop_merge_maps_keeps_new_keys(existing in small_map(), incoming in small_map()) {
        let mut tree = Tree::new();
        set(&mut tree, &["cfg"], Value::Object(existing.clone())).unwrap();
        set(&mut tree, &["cfg"], Value::Object(incoming.clone())).unwrap();

        let merged = get::<Map<String, Value>, _>(&tree, &["cfg"]).unwrap();
        for (key, value) in &incoming {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for key in existing.keys().filter(|k| !incoming.contains_key(*k)) {
            prop_assert_eq!(merged.get(key), existing.get(key));
        }
    }

    /// Appending `a` then `b` equals appending `a ++ b` once
    #[test]
    fn prop_append_is_associative(
        base in prop::collection::vec(any::<i64>(), 0..5),
        a in prop::collection::vec(any::<i64>(), 0..5),
        b in prop::collection::vec(any::<i64>(), 0..5),
    ) {
        let seed = || {
            let mut tree = Tree::new();
            set(&mut tree, &["xs"], json!(base)).unwrap();
            tree
        };

        let mut stepwise = seed();
        set_with_policy::<i64, _>(&mut stepwise, &["xs"], json!(a), MergePolicy::APPEND_ARRAYS).unwrap();
        set_with_policy::<i64, _>(&mut stepwise, &["xs"], json!(b), MergePolicy::APPEND_ARRAYS).unwrap();

        let joined: Vec<i64> = a.iter().chain(b.iter()).copied().collect();
        let mut once = seed();
        set_with_policy::<i64, _>(&mut once, &["xs"], json!(joined), MergePolicy::APPEND_ARRAYS).unwrap();

        prop_assert_eq!(&stepwise, &once);

        let expected: Vec<i64> = base.iter().chain(a.iter()).chain(b.iter()).copied().collect();
        prop_assert_eq!(get::<Vec<i64>, _>(&stepwise, &["xs"]).unwrap(), expected);
    }

    /// Setting below a scalar fails without FORCE_THROUGH and leaves the tree alone
    #[test]
    fn prop_scalar_intermediate_is_bad_path(head in segment(), tail in key_path(), n in any::<i64>()) {
        let mut tree = Tree::new();
        set(&mut tree, &[head.clone()], n).unwrap();
        let before = tree.clone();

        let mut path = vec![head.clone()];
        path.extend(tail);
        let err = set(&mut tree, &path, true).unwrap_err();

        prop_assert_eq!(err, PathError::BadPath { prefix: head });
        prop_assert_eq!(tree, before);
    }
}
