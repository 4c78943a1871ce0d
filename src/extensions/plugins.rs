use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Viewport};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub zoom: f64,
    pub offset: (f64, f64),
    pub tree_node_count: usize,
    pub collapsed_count: usize,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrgChartEvent {
    /// A node body was clicked. This is the host's `on_node_click` hook.
    NodeClicked { id: NodeId },
    CollapseToggled { id: NodeId, collapsed: bool },
    HighlightChanged { id: Option<NodeId> },
    SearchChanged { term: String },
    ViewChanged { zoom: f64, offset_x: f64, offset_y: f64 },
    PanStarted,
    PanEnded,
    Rendered { node_count: usize },
}

/// Observer interface for chart events.
///
/// Plugins see events and a read-only context; they cannot mutate the chart
/// from inside a hook.
pub trait OrgChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &OrgChartEvent, context: PluginContext);
}
