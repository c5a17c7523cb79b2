//! Sparse node storage addressed by level-order index

use crate::types::Digest;
use std::collections::HashMap;

/// Populated tree nodes, stored densely and looked up by level-order index.
///
/// Only slots that hold a digest are materialised, so a tree whose last
/// levels are partly empty costs nothing for the empty slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeArena {
    digests: Vec<Digest>,
    slots: HashMap<usize, usize>,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            digests: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Store `digest` at `index`, replacing any previous value.
    pub fn insert(&mut self, index: usize, digest: Digest) {
        match self.slots.get(&index) {
            Some(&dense) => self.digests[dense] = digest,
            None => {
                self.slots.insert(index, self.digests.len());
                self.digests.push(digest);
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&Digest> {
        self.slots.get(&index).map(|&dense| &self.digests[dense])
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Populated `(index, digest)` pairs in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Digest)> {
        let mut indices: Vec<usize> = self.slots.keys().copied().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(move |index| (index, &self.digests[self.slots[&index]]))
    }
}
