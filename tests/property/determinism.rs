//! Property-based tests for determinism guarantees

use provebit::tree::builder::TreeBuilder;
use provebit::tree::hasher::DigestAlgorithm;
use provebit::tree::leaves::LeafSet;
use provebit::types::Digest;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_contents(contents: &[Vec<u8>], name_offset: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (i, content) in contents.iter().enumerate() {
        fs::write(temp_dir.path().join(format!("f{}", i + name_offset)), content).unwrap();
    }
    temp_dir
}

/// Test that leaf sorting ignores the order digests arrive in
#[test]
fn test_leaf_order_independence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(any::<[u8; 32]>(), 0..64),
            |digests| {
                let mut reversed = digests.clone();
                reversed.reverse();

                let forward = LeafSet::from_digests(digests);
                let backward = LeafSet::from_digests(reversed);

                assert_eq!(forward.as_slice(), backward.as_slice());
                Ok(())
            },
        )
        .unwrap();
}

/// Test that leaves are in non-decreasing hex order and padded to even length
#[test]
fn test_leaves_sorted_and_even_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(any::<[u8; 32]>(), 0..64),
            |digests| {
                let count = digests.len();
                let leaves = LeafSet::from_digests(digests);
                let hex: Vec<String> = leaves.as_slice().iter().map(hex::encode).collect();

                assert!(hex.windows(2).all(|pair| pair[0] <= pair[1]));
                assert_eq!(leaves.len() % 2, 0);
                assert_eq!(leaves.file_count(), count);
                if count % 2 == 1 {
                    assert_eq!(leaves.as_slice()[count - 1], leaves.as_slice()[count]);
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Test that the root depends on file contents only, not names or order
#[test]
fn test_root_content_determinism_property() {
    let config = ProptestConfig::with_cases(24);
    let mut runner = proptest::test_runner::TestRunner::new(config);

    runner
        .run(
            &prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 0..12),
            |contents| {
                let mut shuffled = contents.clone();
                shuffled.rotate_left(contents.len() / 2);

                let dir_a = write_contents(&contents, 0);
                let dir_b = write_contents(&shuffled, 100);

                let root_a = TreeBuilder::new(dir_a.path().to_path_buf())
                    .compute_root()
                    .unwrap();
                let root_b = TreeBuilder::new(dir_b.path().to_path_buf())
                    .compute_root()
                    .unwrap();

                assert_eq!(root_a, root_b);
                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Pair hashing is order-sensitive
    #[test]
    fn pair_digest_is_ordered(left in any::<[u8; 32]>(), right in any::<[u8; 32]>()) {
        prop_assume!(left != right);
        let alg = DigestAlgorithm::Sha256;
        let forward: Digest = alg.digest_pair(&left, &right);
        let backward: Digest = alg.digest_pair(&right, &left);
        prop_assert_ne!(forward, backward);
    }
}
