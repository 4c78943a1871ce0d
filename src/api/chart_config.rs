use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Viewport, ZoomLimits};
use crate::error::{OrgChartError, OrgChartResult};

use super::{LayoutMetrics, PointerBehavior, ZoomBehavior};

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a config file instead of
/// inventing an ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgChartConfig {
    pub viewport: Viewport,
    /// Node rendered with the highlight treatment ("my position").
    #[serde(default)]
    pub highlighted_id: Option<NodeId>,
    #[serde(default)]
    pub zoom_behavior: ZoomBehavior,
    #[serde(default)]
    pub pointer_behavior: PointerBehavior,
    #[serde(default)]
    pub layout_metrics: LayoutMetrics,
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
}

impl OrgChartConfig {
    /// Creates a config with default zoom, pointer and layout behavior.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            highlighted_id: None,
            zoom_behavior: ZoomBehavior::default(),
            pointer_behavior: PointerBehavior::default(),
            layout_metrics: LayoutMetrics::default(),
            notification_capacity: default_notification_capacity(),
        }
    }

    #[must_use]
    pub fn with_highlighted_id(mut self, id: impl Into<NodeId>) -> Self {
        self.highlighted_id = Some(id.into());
        self
    }

    /// Sets the zoom applied on construction and by `reset_view`.
    #[must_use]
    pub fn with_initial_zoom(mut self, initial_zoom: f64) -> Self {
        self.zoom_behavior.initial_zoom = initial_zoom;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.zoom_behavior.limits = ZoomLimits { min_zoom, max_zoom };
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, behavior: ZoomBehavior) -> Self {
        self.zoom_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_pointer_behavior(mut self, behavior: PointerBehavior) -> Self {
        self.pointer_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_layout_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.layout_metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> OrgChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OrgChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> OrgChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| OrgChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_notification_capacity() -> usize {
    8
}
