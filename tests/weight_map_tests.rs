#![cfg(feature = "persistent")]
//! Integration tests for `PersistentWeightMap`.
//!
//! These tests exercise the public API: capability-keyed insert and
//! lookup, persistence across versions, and the replace-on-equal
//! behavior.

use bbmap::control::Optional;
use bbmap::persistent::{CompareKey, PersistentWeightMap};
use rstest::rstest;

// =============================================================================
// Lookup Tests
// =============================================================================

#[rstest]
fn test_lookup_on_empty_map_is_absent() {
    let map: PersistentWeightMap<String, i32> = PersistentWeightMap::new();
    assert_eq!(map.lookup(&CompareKey::string("anything")), Optional::Absent);
}

#[rstest]
fn test_string_scenario() {
    let map = PersistentWeightMap::new()
        .insert(CompareKey::string("b"), 1)
        .insert(CompareKey::string("a"), 2)
        .insert(CompareKey::string("c"), 3)
        .insert(CompareKey::string("d"), 4)
        .insert(CompareKey::string("e"), 5);

    assert_eq!(map.len(), 5);
    assert_eq!(map.lookup(&CompareKey::string("d")), Optional::Present(&4));
    assert_eq!(map.lookup(&CompareKey::string("z")), Optional::Absent);
}

#[rstest]
fn test_lookup_finds_every_inserted_key() {
    let mut map = PersistentWeightMap::new();
    for key in 0..100 {
        map = map.insert(CompareKey::from_ord(key), key * 3);
    }

    assert_eq!(map.len(), 100);
    for key in 0..100 {
        assert_eq!(
            map.lookup(&CompareKey::from_ord(key)),
            Optional::Present(&(key * 3))
        );
    }
    assert_eq!(map.lookup(&CompareKey::from_ord(100)), Optional::Absent);
    assert_eq!(map.lookup(&CompareKey::from_ord(-1)), Optional::Absent);
}

#[rstest]
fn test_lookup_result_is_matched_not_unwrapped() {
    let map = PersistentWeightMap::new().insert(CompareKey::string("key"), 9);

    match map.lookup(&CompareKey::string("key")) {
        Optional::Present(value) => assert_eq!(*value, 9),
        Optional::Absent => panic!("key should be present"),
    }
}

#[rstest]
fn test_contains_agrees_with_lookup() {
    let map = PersistentWeightMap::new().insert(CompareKey::from_ord(1), "one");
    assert!(map.contains(&CompareKey::from_ord(1)));
    assert!(!map.contains(&CompareKey::from_ord(2)));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[rstest]
fn test_insert_does_not_modify_original() {
    let original = PersistentWeightMap::new()
        .insert(CompareKey::string("a"), 1)
        .insert(CompareKey::string("b"), 2);

    let extended = original.insert(CompareKey::string("c"), 3);

    assert_eq!(original.len(), 2);
    assert_eq!(original.lookup(&CompareKey::string("c")), Optional::Absent);
    assert_eq!(extended.len(), 3);
    assert_eq!(extended.lookup(&CompareKey::string("c")), Optional::Present(&3));
}

#[rstest]
fn test_overwrite_does_not_modify_original() {
    let original = PersistentWeightMap::new().insert(CompareKey::string("key"), 1);
    let rewritten = original.insert(CompareKey::string("key"), 2);

    assert_eq!(original.lookup(&CompareKey::string("key")), Optional::Present(&1));
    assert_eq!(rewritten.lookup(&CompareKey::string("key")), Optional::Present(&2));
    assert_eq!(original.len(), 1);
    assert_eq!(rewritten.len(), 1);
}

#[rstest]
fn test_every_snapshot_in_a_chain_stays_valid() {
    let mut snapshots = vec![PersistentWeightMap::new()];
    for key in 0..10 {
        let next = snapshots
            .last()
            .expect("at least the empty snapshot")
            .insert(CompareKey::from_ord(key), key);
        snapshots.push(next);
    }

    for (version, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(snapshot.len(), version);
        let inserted = i32::try_from(version).expect("small version");
        for key in 0..10 {
            let expected = if key < inserted {
                Optional::Present(&key)
            } else {
                Optional::Absent
            };
            assert_eq!(snapshot.lookup(&CompareKey::from_ord(key)), expected);
        }
    }
}

// =============================================================================
// Overwrite Semantics Tests
// =============================================================================

#[rstest]
fn test_equal_keys_replace_the_value() {
    let map = PersistentWeightMap::new()
        .insert(CompareKey::caseless("Berlin"), "old")
        .insert(CompareKey::caseless("BERLIN"), "new");

    assert_eq!(map.len(), 1);
    assert_eq!(
        map.lookup(&CompareKey::caseless("berlin")),
        Optional::Present(&"new")
    );
}

#[rstest]
fn test_distinct_caseless_keys_stay_separate() {
    let map = PersistentWeightMap::new()
        .insert(CompareKey::caseless("Oslo"), 1)
        .insert(CompareKey::caseless("Lima"), 2);

    assert_eq!(map.len(), 2);
    assert_eq!(map.lookup(&CompareKey::caseless("OSLO")), Optional::Present(&1));
    assert_eq!(map.lookup(&CompareKey::caseless("lima")), Optional::Present(&2));
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_singleton_holds_exactly_one_entry() {
    let map = PersistentWeightMap::singleton(CompareKey::from_ord(7), "seven");
    assert_eq!(map.len(), 1);
    assert!(!map.is_empty());
    assert_eq!(map.lookup(&CompareKey::from_ord(7)), Optional::Present(&"seven"));
}

#[rstest]
fn test_default_is_empty() {
    let map: PersistentWeightMap<i32, i32> = PersistentWeightMap::default();
    assert!(map.is_empty());
}

#[rstest]
fn test_custom_ordering_reverses_extremes() {
    // Keys ordered descending: "less" means numerically greater.
    let reverse_key = |label: i32| {
        CompareKey::new(
            label,
            move |other: &i32| label == *other,
            move |other: &i32| label > *other,
            move |other: &i32| label < *other,
        )
    };

    let mut map = PersistentWeightMap::new();
    for key in 0..20 {
        map = map.insert(reverse_key(key), key);
    }

    assert_eq!(map.len(), 20);
    for key in 0..20 {
        assert_eq!(map.lookup(&reverse_key(key)), Optional::Present(&key));
    }
}
