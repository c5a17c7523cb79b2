//! Tree shape and level-order index arithmetic
//!
//! Nodes are addressed level-order: root = 0, left child = 2i+1,
//! right child = 2i+2, parent = (i-1)/2. Level `L` spans indices
//! `2^L - 1 ..= 2^(L+1) - 2`; leaves live on level `height`.

use serde::Serialize;

/// Shape of a tree derived from its leaf count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TreeShape {
    /// Root is level 0, leaves are level `height`
    pub height: u32,
    /// Leaf count after padding
    pub num_leaves: usize,
    /// Hashed files plus populated internal nodes
    pub total_nodes: usize,
}

impl TreeShape {
    /// Derive the shape for `file_count` hashed files padded to `num_leaves` leaves.
    pub fn new(file_count: usize, num_leaves: usize) -> Self {
        if num_leaves == 0 {
            return Self::default();
        }
        Self {
            height: ceil_log2(num_leaves),
            num_leaves,
            total_nodes: file_count + internal_node_count(num_leaves),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_leaves == 0
    }

    /// Slot count of a complete tree of this height, `2^(height+1) - 1`
    pub fn capacity(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (1usize << (self.height + 1)) - 1
    }

    /// Index of the leftmost leaf
    pub fn first_leaf_index(&self) -> usize {
        level_start(self.height)
    }

    /// Populated node count for every level, root first.
    pub fn level_populations(&self) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut counts = vec![self.num_leaves];
        let mut count = self.num_leaves;
        while count > 1 {
            count = next_level_count(count);
            counts.push(count);
        }
        counts.reverse();
        counts
    }
}

/// Populated node count one level above a level holding `count` nodes.
///
/// Halves, then rounds an odd result up to even unless it is the root.
fn next_level_count(count: usize) -> usize {
    let mut next = count / 2;
    if next % 2 == 1 && next != 1 {
        next += 1;
    }
    next
}

/// Sum of populated nodes on every level above the leaves
pub fn internal_node_count(num_leaves: usize) -> usize {
    let mut count = num_leaves;
    let mut total = 0;
    while count > 1 {
        count = next_level_count(count);
        total += count;
    }
    total
}

/// `ceil(log2(n))` for `n >= 1`
pub fn ceil_log2(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros()
}

pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Parent of a non-root index
pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Leftmost index on `level`
pub fn level_start(level: u32) -> usize {
    (1usize << level) - 1
}

/// Rightmost index on `level`
pub fn level_end(level: u32) -> usize {
    (1usize << (level + 1)) - 2
}

/// Level that `index` lives on
pub fn level_of(index: usize) -> u32 {
    usize::BITS - 1 - (index + 1).leading_zeros()
}
