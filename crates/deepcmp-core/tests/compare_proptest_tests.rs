//! Property tests: deep copies never differ, and a single mutated leaf yields
//! exactly one diff at that leaf's path.

mod common;

use common::{Point, Quality, Record};
use deepcmp_core::compare;
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeMap;

fn quality() -> impl Strategy<Value = Quality> {
    prop_oneof![
        Just(Quality::Low),
        Just(Quality::Standard),
        Just(Quality::High),
    ]
}

fn point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point { x, y })
}

prop_compose! {
    fn record()(
        id in any::<u32>(),
        name in "[a-z]{0,12}",
        quality in quality(),
        tags in prop::collection::vec("[a-z]{1,6}", 0..6),
        scores in prop::collection::btree_map("[a-z]{1,4}", any::<i64>(), 0..5),
        origin in [point(), point()],
        meta in prop::option::of(point().prop_map(Box::new)),
    ) -> Record {
        Record { id, name, quality, tags, scores, origin, meta }
    }
}

proptest! {
    #[test]
    fn prop_deep_copy_has_no_diffs(expected in record()) {
        let actual = expected.clone();
        prop_assert!(compare(&expected, &actual).unwrap().is_empty());
    }

    #[test]
    fn prop_changed_name_is_one_diff(expected in record()) {
        let mut actual = expected.clone();
        actual.name.push('!');

        let diffs = compare(&expected, &actual).unwrap();
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].field.as_str(), ".name");
    }

    #[test]
    fn prop_changed_tag_is_one_diff(
        expected in record().prop_filter("needs tags", |r| !r.tags.is_empty()),
        pick in any::<Index>(),
    ) {
        let i = pick.index(expected.tags.len());
        let mut actual = expected.clone();
        actual.tags[i].push('!');

        let diffs = compare(&expected, &actual).unwrap();
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].field.clone(), format!(".tags[{}]", i));
    }

    #[test]
    fn prop_changed_score_is_one_diff(
        expected in record().prop_filter("needs scores", |r| !r.scores.is_empty()),
        pick in any::<Index>(),
    ) {
        let keys: Vec<String> = expected.scores.keys().cloned().collect();
        let key = keys[pick.index(keys.len())].clone();
        let mut actual = expected.clone();
        if let Some(v) = actual.scores.get_mut(&key) {
            *v = v.wrapping_add(1);
        }

        let diffs = compare(&expected, &actual).unwrap();
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].field.clone(), format!(".scores[{}]", key));
    }

    #[test]
    fn prop_changed_pointee_is_one_diff(
        expected in record().prop_filter("needs meta", |r| r.meta.is_some()),
    ) {
        let mut actual = expected.clone();
        if let Some(meta) = actual.meta.as_mut() {
            meta.y = meta.y.wrapping_add(1);
        }

        let diffs = compare(&expected, &actual).unwrap();
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].field.as_str(), "*(.meta).y");
    }

    #[test]
    fn prop_tag_count_change_is_length_mismatch(expected in record()) {
        let mut actual = expected.clone();
        actual.tags.push("extra".to_string());

        let err = compare(&expected, &actual).unwrap_err();
        prop_assert_eq!(err.field(), ".tags");
    }

    #[test]
    fn prop_map_diffs_are_sorted_by_key(
        entries in prop::collection::hash_map("[a-z]{1,4}", any::<u8>(), 1..8),
    ) {
        let bumped: std::collections::HashMap<String, u8> = entries
            .iter()
            .map(|(k, v)| (k.clone(), v.wrapping_add(1)))
            .collect();

        let fields: Vec<String> = compare(&entries, &bumped)
            .unwrap()
            .into_iter()
            .map(|d| d.field)
            .collect();
        let sorted: BTreeMap<&String, ()> = entries.keys().map(|k| (k, ())).collect();
        let wanted: Vec<String> = sorted.keys().map(|k| format!("[{}]", k)).collect();
        prop_assert_eq!(fields, wanted);
    }
}
