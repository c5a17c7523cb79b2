//! Bottom-up construction of internal tree levels

use crate::tree::arena::NodeArena;
use crate::tree::hasher::DigestAlgorithm;
use crate::tree::shape::{left_child, level_end, level_start, right_child};
use tracing::{debug, warn};

/// Fill every internal level of `arena`, from `height - 1` up to the root.
///
/// Leaves must already sit on level `height`. Within a level, positions are
/// visited left to right. The first position whose left child is absent ends
/// that level; if an odd number of nodes were built before it, the previous
/// sibling is copied into it so the level above can pair every node.
/// Construction then carries on with the next level up.
pub fn build_levels(arena: &mut NodeArena, height: u32, algorithm: DigestAlgorithm) {
    for level in (0..height).rev() {
        let built = build_level(arena, level, algorithm);
        debug!(level, nodes = built, "Built tree level");
    }
}

/// Build one level and return how many slots were populated, duplicates included.
fn build_level(arena: &mut NodeArena, level: u32, algorithm: DigestAlgorithm) -> usize {
    let mut nodes_built = 0;

    for index in level_start(level)..=level_end(level) {
        let left = match arena.get(left_child(index)) {
            Some(left) => *left,
            None => {
                if nodes_built % 2 == 1 {
                    if let Some(sibling) = arena.get(index - 1).copied() {
                        arena.insert(index, sibling);
                        nodes_built += 1;
                    }
                }
                break;
            }
        };

        let right = match arena.get(right_child(index)) {
            Some(right) => *right,
            None => {
                // Unreachable while every level below holds an even count.
                warn!(index, "Right child missing, pairing left child with itself");
                left
            }
        };

        arena.insert(index, algorithm.digest_pair(&left, &right));
        nodes_built += 1;
    }

    nodes_built
}
