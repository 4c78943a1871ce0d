use serde::{Deserialize, Serialize};

use crate::core::ZoomLimits;

/// Pan/zoom viewport policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Zoom applied on construction and by `reset_view`.
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,
    #[serde(default)]
    pub limits: ZoomLimits,
    /// Relative zoom change per 120-unit wheel notch.
    #[serde(default = "default_wheel_zoom_step_ratio")]
    pub wheel_zoom_step_ratio: f64,
    /// Factor used by `zoom_in`/`zoom_out` controls.
    #[serde(default = "default_button_zoom_factor")]
    pub button_zoom_factor: f64,
    /// Screen distance kept between the viewport top and the root card when
    /// the view is reset.
    #[serde(default = "default_top_margin_px")]
    pub top_margin_px: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            initial_zoom: default_initial_zoom(),
            limits: ZoomLimits::default(),
            wheel_zoom_step_ratio: default_wheel_zoom_step_ratio(),
            button_zoom_factor: default_button_zoom_factor(),
            top_margin_px: default_top_margin_px(),
        }
    }
}

/// Pointer handling policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerBehavior {
    /// A press released within this distance of where it started counts as a
    /// click; anything farther is a drag-to-pan.
    pub click_slop_px: f64,
}

impl Default for PointerBehavior {
    fn default() -> Self {
        Self { click_slop_px: 4.0 }
    }
}

fn default_initial_zoom() -> f64 {
    1.0
}

fn default_wheel_zoom_step_ratio() -> f64 {
    0.1
}

fn default_button_zoom_factor() -> f64 {
    1.2
}

fn default_top_margin_px() -> f64 {
    24.0
}
