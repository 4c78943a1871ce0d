use tracing::trace;

use crate::core::Point;
use crate::error::{OrgChartError, OrgChartResult};
use crate::extensions::OrgChartEvent;
use crate::interaction::{InteractionMode, PointerRelease};
use crate::render::Renderer;

use super::{NodeAction, OrgChart, PointerBehavior, hit_test};

impl<R: Renderer> OrgChart<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn pointer_behavior(&self) -> PointerBehavior {
        self.pointer_behavior
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> OrgChartResult<()> {
        let point = finite_pointer(x, y)?;
        self.interaction.on_pointer_down(point);
        Ok(())
    }

    /// Tracks pointer motion; once a press leaves the click slop the view
    /// pans with the pointer. Returns `true` when the view moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> OrgChartResult<bool> {
        let point = finite_pointer(x, y)?;
        let was_panning = self.interaction.mode() == InteractionMode::Panning;
        let Some((delta_x, delta_y)) = self
            .interaction
            .on_pointer_move(point, self.pointer_behavior.click_slop_px)
        else {
            return Ok(false);
        };
        if !was_panning {
            self.emit_event(OrgChartEvent::PanStarted);
        }
        self.pan_by(delta_x, delta_y)?;
        Ok(true)
    }

    /// Ends a press. A press that never turned into a pan is treated as a
    /// click at the press origin and dispatched; the dispatched action is
    /// returned.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> OrgChartResult<Option<NodeAction>> {
        let point = finite_pointer(x, y)?;
        match self.interaction.on_pointer_up(point) {
            PointerRelease::Click(origin) => self.click_at(origin.x, origin.y),
            PointerRelease::PanEnded => {
                self.emit_event(OrgChartEvent::PanEnded);
                Ok(None)
            }
            PointerRelease::Ignored => Ok(None),
        }
    }

    /// Abandons a press in progress without dispatching anything.
    pub fn pointer_cancel(&mut self) {
        if self.interaction.mode() == InteractionMode::Panning {
            self.emit_event(OrgChartEvent::PanEnded);
        }
        self.interaction.cancel();
    }

    /// Action of the region under a screen point, without dispatching it.
    #[must_use]
    pub fn action_at(&self, x: f64, y: f64) -> Option<NodeAction> {
        hit_test(&self.build_layout(), self.transform, Point::new(x, y))
    }

    /// Hit-tests a screen point and dispatches the resulting action.
    ///
    /// A toggle click only toggles; a body click fires exactly one node
    /// click. Empty canvas yields `None`.
    pub fn click_at(&mut self, x: f64, y: f64) -> OrgChartResult<Option<NodeAction>> {
        finite_pointer(x, y)?;
        let Some(action) = self.action_at(x, y) else {
            trace!(x, y, "click on empty canvas");
            return Ok(None);
        };
        self.dispatch(&action)?;
        Ok(Some(action))
    }
}

fn finite_pointer(x: f64, y: f64) -> OrgChartResult<Point> {
    let point = Point::new(x, y);
    if !point.is_finite() {
        return Err(OrgChartError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(point)
}
