//! # Completed-Set
//!
//! The caller-owned snapshot of which tools a user has finished. It is
//! loaded from an external completion store, passed by reference into every
//! engine call, and never retained or mutated by the engine.
//!
//! It is a set: duplicates collapse and insertion order is irrelevant, so
//! every computation over it is order-independent. Ids unknown to the
//! catalog are kept as-is; consumers ignore them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::identity::ToolId;

/// A set of completed tool identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSet(BTreeSet<ToolId>);

impl CompletedSet {
    /// Create an empty completed-set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Whether the given tool id is in the set.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Add a tool id. Returns `false` if it was already present.
    pub fn insert(&mut self, id: ToolId) -> bool {
        self.0.insert(id)
    }

    /// Number of ids in the set, including ids unknown to any catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolId> {
        self.0.iter()
    }
}

impl FromIterator<ToolId> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = ToolId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ToolId> for CompletedSet {
    fn extend<I: IntoIterator<Item = ToolId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CompletedSet {
    type Item = &'a ToolId;
    type IntoIter = std::collections::btree_set::Iter<'a, ToolId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
