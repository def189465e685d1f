//! Property-based tests for digest determinism and artifact round-trips

use fileguard::store;
use fileguard::tree::hasher::{self, HashAlgorithm};
use fileguard::types::{BaselineSet, FileRecord};
use proptest::prelude::*;

fn algorithm_strategy() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![Just(HashAlgorithm::Sha256), Just(HashAlgorithm::Blake3)]
}

fn baseline_strategy() -> impl Strategy<Value = BaselineSet> {
    (
        "/[a-z]{1,8}(/[a-z0-9_.]{1,8}){0,3}",
        algorithm_strategy(),
        prop::collection::vec(("[a-zA-Z0-9_./ -]{1,24}", "[0-9a-f]{64}"), 0..16),
    )
        .prop_map(|(root, algorithm, files)| {
            let records = files
                .into_iter()
                .map(|(path, digest)| FileRecord::new(format!("{}/{}", root, path), digest))
                .collect();
            BaselineSet::new(root, algorithm, records)
        })
}

/// Same bytes always produce the same digest; different bytes a different one
#[test]
fn test_content_hash_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<Vec<u8>>(), algorithm_strategy()),
            |(content1, content2, algorithm)| {
                let hash1 = hasher::compute_content_hash(&content1, algorithm);
                let again = hasher::compute_content_hash(&content1, algorithm);
                prop_assert_eq!(&hash1, &again);

                if content1 != content2 {
                    let hash2 = hasher::compute_content_hash(&content2, algorithm);
                    prop_assert_ne!(hash1, hash2);
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Streaming through the read buffer agrees with one-shot hashing
#[test]
fn test_streaming_matches_one_shot_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(any::<u8>(), 0..40_000), algorithm_strategy()),
            |(content, algorithm)| {
                let streamed = hasher::hash_reader(content.as_slice(), algorithm).unwrap();
                prop_assert_eq!(streamed, hasher::compute_content_hash(&content, algorithm));
                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    /// deserialize(serialize(S)) == S, ignoring record order
    #[test]
    fn prop_baseline_round_trip(set in baseline_strategy()) {
        let bytes = store::serialize(&set).unwrap();
        let decoded = store::deserialize(&bytes).unwrap();
        prop_assert!(decoded.same_contents(&set));
        prop_assert_eq!(decoded.root_path, set.root_path);
        prop_assert_eq!(decoded.algorithm, set.algorithm);
    }
}
