use serde::{Deserialize, Serialize};

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// Pointer is down but has not moved past the click slop yet.
    Pressed,
    Panning,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerRelease {
    /// Release without a preceding press.
    Ignored,
    /// Press and release stayed within the click slop.
    Click(Point),
    /// The press turned into a drag-to-pan.
    PanEnded,
}

/// Press/drag tracking for drag-to-pan and click detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    press_origin: Option<Point>,
    last_pointer: Option<Point>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            press_origin: None,
            last_pointer: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    pub fn on_pointer_down(&mut self, point: Point) {
        self.mode = InteractionMode::Pressed;
        self.press_origin = Some(point);
        self.last_pointer = Some(point);
    }

    /// Tracks pointer motion and returns the pan delta to apply, if any.
    ///
    /// A press becomes a pan once the pointer leaves the `click_slop_px`
    /// radius; the first pan delta covers the whole distance from the press
    /// origin so no motion is lost.
    pub fn on_pointer_move(&mut self, point: Point, click_slop_px: f64) -> Option<(f64, f64)> {
        let previous = self.last_pointer.replace(point);
        match self.mode {
            InteractionMode::Idle => None,
            InteractionMode::Pressed => {
                let origin = self.press_origin?;
                let distance = (point.x - origin.x).hypot(point.y - origin.y);
                if distance <= click_slop_px {
                    return None;
                }
                self.mode = InteractionMode::Panning;
                Some((point.x - origin.x, point.y - origin.y))
            }
            InteractionMode::Panning => {
                let previous = previous?;
                Some((point.x - previous.x, point.y - previous.y))
            }
        }
    }

    pub fn on_pointer_up(&mut self, point: Point) -> PointerRelease {
        let mode = self.mode;
        let origin = self.press_origin.take();
        self.mode = InteractionMode::Idle;
        self.last_pointer = Some(point);
        match (mode, origin) {
            (InteractionMode::Pressed, Some(origin)) => PointerRelease::Click(origin),
            (InteractionMode::Panning, _) => PointerRelease::PanEnded,
            _ => PointerRelease::Ignored,
        }
    }

    /// Abandons any press in progress, e.g. when the pointer leaves the widget.
    pub fn cancel(&mut self) {
        self.mode = InteractionMode::Idle;
        self.press_origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState, PointerRelease};
    use crate::core::Point;

    #[test]
    fn small_motion_stays_a_click() {
        let mut state = InteractionState::default();
        state.on_pointer_down(Point::new(10.0, 10.0));
        assert_eq!(state.on_pointer_move(Point::new(12.0, 11.0), 4.0), None);
        assert_eq!(state.mode(), InteractionMode::Pressed);
        assert_eq!(
            state.on_pointer_up(Point::new(12.0, 11.0)),
            PointerRelease::Click(Point::new(10.0, 10.0))
        );
        assert_eq!(state.mode(), InteractionMode::Idle);
    }

    #[test]
    fn drag_past_slop_pans_with_full_delta() {
        let mut state = InteractionState::default();
        state.on_pointer_down(Point::new(0.0, 0.0));
        assert_eq!(state.on_pointer_move(Point::new(2.0, 0.0), 4.0), None);
        assert_eq!(
            state.on_pointer_move(Point::new(10.0, 5.0), 4.0),
            Some((10.0, 5.0))
        );
        assert_eq!(
            state.on_pointer_move(Point::new(13.0, 1.0), 4.0),
            Some((3.0, -4.0))
        );
        assert_eq!(
            state.on_pointer_up(Point::new(13.0, 1.0)),
            PointerRelease::PanEnded
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InteractionState::default();
        assert_eq!(state.on_pointer_move(Point::new(5.0, 5.0), 4.0), None);
        assert_eq!(
            state.on_pointer_up(Point::new(5.0, 5.0)),
            PointerRelease::Ignored
        );
    }

    #[test]
    fn cancel_drops_pending_press() {
        let mut state = InteractionState::default();
        state.on_pointer_down(Point::new(0.0, 0.0));
        state.cancel();
        assert_eq!(
            state.on_pointer_up(Point::new(0.0, 0.0)),
            PointerRelease::Ignored
        );
    }
}
