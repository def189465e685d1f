//! Property-based tests for the three-way diff

use fileguard::diff::diff;
use fileguard::tree::hasher::HashAlgorithm;
use fileguard::types::{BaselineSet, FileRecord};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn records_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-e]{1,3}", "[0-3]", 0..20)
}

fn set_from(records: &BTreeMap<String, String>) -> BaselineSet {
    BaselineSet::new(
        "/root",
        HashAlgorithm::Sha256,
        records
            .iter()
            .map(|(p, d)| FileRecord::new(p.clone(), d.clone()))
            .collect(),
    )
}

proptest! {
    /// Categories are disjoint and each matches its definition exactly
    #[test]
    fn prop_diff_categories_are_exact(before in records_strategy(), after in records_strategy()) {
        let result = diff(&set_from(&before), &set_from(&after));

        prop_assert!(result.changed.is_disjoint(&result.added));
        prop_assert!(result.changed.is_disjoint(&result.removed));
        prop_assert!(result.added.is_disjoint(&result.removed));

        let expected_changed: BTreeSet<String> = after
            .iter()
            .filter(|(p, d)| before.get(*p).map_or(false, |old| old != *d))
            .map(|(p, _)| p.clone())
            .collect();
        let expected_added: BTreeSet<String> =
            after.keys().filter(|p| !before.contains_key(*p)).cloned().collect();
        let expected_removed: BTreeSet<String> =
            before.keys().filter(|p| !after.contains_key(*p)).cloned().collect();

        prop_assert_eq!(result.changed, expected_changed);
        prop_assert_eq!(result.added, expected_added);
        prop_assert_eq!(result.removed, expected_removed);
    }

    /// A set compared with itself, in any record order, has no differences
    #[test]
    fn prop_self_diff_is_empty(records in records_strategy()) {
        let set = set_from(&records);
        let mut reversed = set.clone();
        reversed.records.reverse();
        prop_assert!(diff(&set, &reversed).is_empty());
    }
}
