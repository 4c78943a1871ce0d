use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::NodeId;

/// Per-node collapsed flags owned by the chart container.
///
/// Only collapsed ids are stored, so an absent id reads as expanded and a
/// double toggle restores the exact previous state. Equality ignores toggle
/// order; iteration follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapsedState {
    collapsed: IndexSet<NodeId>,
}

impl CollapsedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds state from an id → collapsed map; `false` entries are dropped.
    #[must_use]
    pub fn from_flags<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<NodeId>,
    {
        Self {
            collapsed: flags
                .into_iter()
                .filter(|(_, collapsed)| *collapsed)
                .map(|(id, _)| id.into())
                .collect(),
        }
    }

    #[must_use]
    pub fn is_collapsed(&self, id: &NodeId) -> bool {
        self.collapsed.contains(id)
    }

    /// Flips the flag for `id` and returns the new collapsed value.
    ///
    /// Any id is accepted, including ids that are not part of the tree.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if self.collapsed.shift_remove(id) {
            false
        } else {
            self.collapsed.insert(id.clone());
            true
        }
    }

    /// Returns `true` when the stored flag changed.
    pub fn set(&mut self, id: &NodeId, collapsed: bool) -> bool {
        if collapsed {
            self.collapsed.insert(id.clone())
        } else {
            self.collapsed.shift_remove(id)
        }
    }

    pub fn clear(&mut self) {
        self.collapsed.clear();
    }

    pub fn collapsed_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.collapsed.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Id → `true` map view in toggle order.
    #[must_use]
    pub fn to_flags(&self) -> IndexMap<NodeId, bool> {
        self.collapsed.iter().map(|id| (id.clone(), true)).collect()
    }
}
