use tracing::debug;

use crate::core::{CollapsedState, NodeId};
use crate::extensions::OrgChartEvent;
use crate::render::Renderer;

use super::OrgChart;

impl<R: Renderer> OrgChart<R> {
    /// Flips the collapsed flag of `id` and returns the new value.
    ///
    /// Any id is accepted; ids outside the tree are stored and never read.
    pub fn toggle_collapse(&mut self, id: &NodeId) -> bool {
        let collapsed = self.collapsed.toggle(id);
        debug!(%id, collapsed, "toggled node collapse");
        self.emit_event(OrgChartEvent::CollapseToggled {
            id: id.clone(),
            collapsed,
        });
        collapsed
    }

    #[must_use]
    pub fn is_collapsed(&self, id: &NodeId) -> bool {
        self.collapsed.is_collapsed(id)
    }

    #[must_use]
    pub fn collapsed_state(&self) -> &CollapsedState {
        &self.collapsed
    }

    /// Expands every node. Returns the number of nodes that were collapsed.
    pub fn expand_all(&mut self) -> usize {
        let ids: Vec<NodeId> = self.collapsed.collapsed_ids().cloned().collect();
        self.collapsed.clear();
        debug!(count = ids.len(), "expanded all nodes");
        for id in &ids {
            self.emit_event(OrgChartEvent::CollapseToggled {
                id: id.clone(),
                collapsed: false,
            });
        }
        ids.len()
    }

    /// Collapses every node that has children. Returns the number of nodes
    /// whose flag changed.
    pub fn collapse_all(&mut self) -> usize {
        let newly_collapsed: Vec<NodeId> = self
            .tree
            .branch_ids()
            .filter(|id| !self.collapsed.is_collapsed(id))
            .cloned()
            .collect();
        for id in &newly_collapsed {
            self.collapsed.set(id, true);
        }
        debug!(count = newly_collapsed.len(), "collapsed all branch nodes");
        for id in &newly_collapsed {
            self.emit_event(OrgChartEvent::CollapseToggled {
                id: id.clone(),
                collapsed: true,
            });
        }
        newly_collapsed.len()
    }
}
