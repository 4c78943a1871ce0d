use tracing::{debug, warn};

use crate::core::NodeId;
use crate::error::{OrgChartError, OrgChartResult};
use crate::extensions::OrgChartEvent;
use crate::render::Renderer;

use super::{NodeAction, Notification, NotificationKind, OrgChart};

impl<R: Renderer> OrgChart<R> {
    #[must_use]
    pub fn highlighted_id(&self) -> Option<&NodeId> {
        self.highlighted_id.as_ref()
    }

    /// Sets the externally owned highlighted node. Clicks never change it.
    pub fn set_highlighted_id(&mut self, id: Option<NodeId>) {
        if self.highlighted_id == id {
            return;
        }
        if let Some(id) = &id {
            if !self.tree.contains(id) {
                warn!(%id, "highlighted id is not part of the tree");
            }
        }
        debug!(id = ?id, "highlighted node changed");
        self.highlighted_id = id.clone();
        self.emit_event(OrgChartEvent::HighlightChanged { id });
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Stores the search text. The tree is neither filtered nor highlighted
    /// by it.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.search_term == term {
            return;
        }
        self.search_term = term;
        self.emit_event(OrgChartEvent::SearchChanged {
            term: self.search_term.clone(),
        });
    }

    /// Surfaces the clicked node's name and role as a notification and
    /// notifies plugins. Does not touch the highlighted id.
    pub fn handle_node_click(&mut self, id: &NodeId) -> OrgChartResult<()> {
        let node = self
            .tree
            .find(id)
            .ok_or_else(|| OrgChartError::InvalidData(format!("unknown node id `{id}`")))?;
        let notification =
            Notification::new(NotificationKind::NodeInfo, node.name.as_str(), node.role.as_str());
        debug!(%id, "node clicked");
        self.notifications.push(notification);
        self.emit_event(OrgChartEvent::NodeClicked { id: id.clone() });
        Ok(())
    }

    /// Applies an action taken from a rendered node.
    pub fn dispatch(&mut self, action: &NodeAction) -> OrgChartResult<()> {
        match action {
            NodeAction::Select(id) => self.handle_node_click(id),
            NodeAction::ToggleCollapse(id) => {
                self.toggle_collapse(id);
                Ok(())
            }
        }
    }

    /// Posts the placeholder notice for an action the host has not wired up.
    pub fn notify_not_implemented(&mut self, feature: &str) {
        debug!(feature, "not implemented action invoked");
        self.notifications
            .push(Notification::not_implemented(feature));
    }

    #[must_use]
    pub fn pending_notifications(&self) -> usize {
        self.notifications.len()
    }

    /// Drains pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
