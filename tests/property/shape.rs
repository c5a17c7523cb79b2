//! Property-based tests for tree shape and level construction

use provebit::tree::arena::NodeArena;
use provebit::tree::hasher::DigestAlgorithm;
use provebit::tree::leaves::LeafSet;
use provebit::tree::levels::build_levels;
use provebit::tree::shape::{level_of, TreeShape};
use proptest::prelude::*;

fn built_arena(leaves: &LeafSet, shape: &TreeShape) -> NodeArena {
    let mut arena = NodeArena::with_capacity(leaves.len() * 2);
    let first = shape.first_leaf_index();
    for (offset, leaf) in leaves.as_slice().iter().enumerate() {
        arena.insert(first + offset, *leaf);
    }
    build_levels(&mut arena, shape.height, DigestAlgorithm::Sha256);
    arena
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Height is the smallest h with 2^h >= leaves, and every leaf fits the bottom level
    #[test]
    fn height_fits_leaves(files in 1usize..2000) {
        let num_leaves = if files % 2 == 0 { files } else { files + 1 };
        let shape = TreeShape::new(files, num_leaves);

        prop_assert!(1usize << shape.height >= num_leaves);
        prop_assert!(shape.height == 1 || 1usize << (shape.height - 1) < num_leaves);
        prop_assert_eq!(shape.capacity(), (1usize << (shape.height + 1)) - 1);
    }

    /// The root is always built and every populated node stays inside the tree
    #[test]
    fn root_always_populated(digests in prop::collection::vec(any::<[u8; 32]>(), 1..200)) {
        let leaves = LeafSet::from_digests(digests);
        let shape = TreeShape::new(leaves.file_count(), leaves.len());
        let arena = built_arena(&leaves, &shape);

        prop_assert!(arena.contains(0));
        for (index, _) in arena.iter() {
            prop_assert!(index < shape.capacity());
            prop_assert!(level_of(index) <= shape.height);
        }
    }

    /// Each level holds an even number of nodes, except the root level
    #[test]
    fn levels_are_even_below_root(digests in prop::collection::vec(any::<[u8; 32]>(), 1..200)) {
        let leaves = LeafSet::from_digests(digests);
        let shape = TreeShape::new(leaves.file_count(), leaves.len());
        let arena = built_arena(&leaves, &shape);

        let mut per_level = vec![0usize; shape.height as usize + 1];
        for (index, _) in arena.iter() {
            per_level[level_of(index) as usize] += 1;
        }

        prop_assert_eq!(per_level[0], 1);
        for count in per_level.iter().skip(1) {
            prop_assert!(*count == 0 || *count % 2 == 0);
        }
    }
}
