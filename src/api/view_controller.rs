use tracing::{debug, warn};

use crate::core::{NodeId, Point, ViewTransform, Viewport};
use crate::error::{OrgChartError, OrgChartResult};
use crate::extensions::OrgChartEvent;
use crate::render::Renderer;

use super::zoom::{resolve_pinch_zoom_factor, resolve_wheel_zoom_factor};
use super::{Notification, NotificationKind, OrgChart, ZoomBehavior};

/// Title of the notification posted by `go_to_my_position`.
pub const MY_POSITION_TITLE: &str = "My position";

impl<R: Renderer> OrgChart<R> {
    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom()
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.zoom_behavior
    }

    /// Translates the view by a screen-space delta.
    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> OrgChartResult<()> {
        if delta_x == 0.0 && delta_y == 0.0 {
            return Ok(());
        }
        self.transform.pan_by(delta_x, delta_y)?;
        self.emit_view_changed();
        Ok(())
    }

    /// Zooms around a screen anchor by a wheel delta (120 units per notch,
    /// negative zooms in). Returns the applied factor; `1.0` when clamped or
    /// when `wheel_delta_y` is zero.
    pub fn wheel_zoom(
        &mut self,
        wheel_delta_y: f64,
        anchor_x: f64,
        anchor_y: f64,
    ) -> OrgChartResult<f64> {
        let Some(factor) =
            resolve_wheel_zoom_factor(wheel_delta_y, self.zoom_behavior.wheel_zoom_step_ratio)?
        else {
            return Ok(1.0);
        };
        self.zoom_around(factor, Point::new(anchor_x, anchor_y))
    }

    /// Zooms around a screen anchor by a pinch scale factor.
    pub fn pinch_zoom(
        &mut self,
        pinch_scale_factor: f64,
        anchor_x: f64,
        anchor_y: f64,
    ) -> OrgChartResult<f64> {
        let Some(factor) = resolve_pinch_zoom_factor(pinch_scale_factor)? else {
            return Ok(1.0);
        };
        self.zoom_around(factor, Point::new(anchor_x, anchor_y))
    }

    /// Zoom-in control: scales by `button_zoom_factor` around the viewport
    /// center. Returns `false` at the zoom limit.
    pub fn zoom_in(&mut self) -> OrgChartResult<bool> {
        let factor = self.zoom_behavior.button_zoom_factor;
        let applied = self.zoom_around(factor, self.viewport.center())?;
        Ok(applied != 1.0)
    }

    pub fn zoom_out(&mut self) -> OrgChartResult<bool> {
        let factor = 1.0 / self.zoom_behavior.button_zoom_factor;
        let applied = self.zoom_around(factor, self.viewport.center())?;
        Ok(applied != 1.0)
    }

    /// Restores the initial zoom with the root card centered.
    pub fn reset_view(&mut self) -> OrgChartResult<()> {
        let transform = self.initial_transform()?;
        if transform != self.transform {
            self.transform = transform;
            self.emit_view_changed();
        }
        Ok(())
    }

    /// Updates the drawing surface size. The layout point at the old
    /// viewport center stays centered.
    pub fn set_viewport(&mut self, viewport: Viewport) -> OrgChartResult<()> {
        if !viewport.is_valid() {
            return Err(OrgChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }
        let centered = self.transform.screen_to_layout(self.viewport.center());
        self.viewport = viewport;
        self.transform.center_on(centered, viewport)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "org chart viewport resized"
        );
        self.emit_view_changed();
        Ok(())
    }

    /// Centers the view on a rendered node's card.
    ///
    /// Returns `false` when the node is not rendered (unknown id or hidden
    /// inside a collapsed branch); the view is left untouched then.
    pub fn center_on_node(&mut self, id: &NodeId) -> OrgChartResult<bool> {
        let layout = self.build_layout();
        let Some(node_box) = layout.node_box(id) else {
            return Ok(false);
        };
        self.transform
            .center_on(node_box.body.center(), self.viewport)?;
        debug!(%id, "centered view on node");
        self.emit_view_changed();
        Ok(true)
    }

    /// "Go to my position": centers on the highlighted node when it is
    /// rendered. Always posts a `Position` notification describing the
    /// outcome. Collapse state is never changed.
    pub fn go_to_my_position(&mut self) -> OrgChartResult<bool> {
        let Some(id) = self.highlighted_id.clone() else {
            warn!("go to my position requested without a highlighted node");
            self.notifications.push(Notification::new(
                NotificationKind::Position,
                MY_POSITION_TITLE,
                "No position is configured for the current user.",
            ));
            return Ok(false);
        };

        let centered = self.center_on_node(&id)?;
        let description = match (centered, self.tree.find(&id)) {
            (true, Some(node)) => format!("Showing {} ({}).", node.name, node.role),
            (false, Some(node)) => {
                warn!(%id, "highlighted node is hidden inside a collapsed branch");
                let collapsed_ancestor = self.tree.path_to(&id).and_then(|path| {
                    path.into_iter()
                        .filter(|ancestor| ancestor.id != id)
                        .find(|ancestor| self.collapsed.is_collapsed(&ancestor.id))
                });
                match collapsed_ancestor {
                    Some(ancestor) => format!(
                        "{} is inside the collapsed branch of {}.",
                        node.name, ancestor.name
                    ),
                    None => format!("{} is inside a collapsed branch.", node.name),
                }
            }
            (_, None) => {
                warn!(%id, "highlighted node is not part of the tree");
                "Your position is not part of this organization chart.".to_owned()
            }
        };
        self.notifications.push(Notification::new(
            NotificationKind::Position,
            MY_POSITION_TITLE,
            description,
        ));
        Ok(centered)
    }

    fn zoom_around(&mut self, factor: f64, anchor: Point) -> OrgChartResult<f64> {
        let before = self.transform.zoom();
        let changed = self
            .transform
            .zoom_at(factor, anchor, self.zoom_behavior.limits)?;
        if !changed {
            return Ok(1.0);
        }
        let applied = self.transform.zoom() / before;
        debug!(zoom = self.transform.zoom(), applied, "org chart zoom changed");
        self.emit_view_changed();
        Ok(applied)
    }

    fn emit_view_changed(&mut self) {
        let (offset_x, offset_y) = self.transform.offset();
        self.emit_event(OrgChartEvent::ViewChanged {
            zoom: self.transform.zoom(),
            offset_x,
            offset_y,
        });
    }
}
