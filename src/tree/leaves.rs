//! Canonical leaf ordering and padding

use crate::types::Digest;
use std::cmp::Ordering;

/// Sorted, even-length sequence of leaf digests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafSet {
    leaves: Vec<Digest>,
    /// Number of digests before padding
    distinct: usize,
}

impl LeafSet {
    /// Sort digests into canonical order and pad to an even count.
    ///
    /// When the count is odd the greatest digest is appended once more.
    pub fn from_digests(mut digests: Vec<Digest>) -> Self {
        digests.sort_by(compare_hex);
        let distinct = digests.len();
        if let Some(last) = digests.last().copied() {
            if distinct % 2 == 1 {
                digests.push(last);
            }
        }
        Self {
            leaves: digests,
            distinct,
        }
    }

    pub fn as_slice(&self) -> &[Digest] {
        &self.leaves
    }

    /// Number of leaves after padding
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Number of leaves that came from hashed files
    pub fn file_count(&self) -> usize {
        self.distinct
    }

    pub fn is_padded(&self) -> bool {
        self.leaves.len() != self.distinct
    }
}

/// Order two digests by their lowercase hex encoding.
///
/// Hex digits sort in the same order as the nibbles they encode, so this is
/// the byte-wise order of the raw digests.
pub fn compare_hex(a: &Digest, b: &Digest) -> Ordering {
    a.cmp(b)
}
