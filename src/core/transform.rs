use serde::{Deserialize, Serialize};

use crate::error::{OrgChartError, OrgChartResult};

use super::{Bounds, Point, Viewport};

/// Allowed zoom range for the pan/zoom viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 4.0,
        }
    }
}

impl ZoomLimits {
    pub fn validate(self) -> OrgChartResult<Self> {
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(OrgChartError::InvalidData(
                "min zoom must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(OrgChartError::InvalidData(
                "max zoom must be finite and >= min zoom".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Layout-space to screen-space mapping: `screen = layout * zoom + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewTransform {
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> OrgChartResult<Self> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(OrgChartError::InvalidData(
                "zoom must be finite and > 0".to_owned(),
            ));
        }
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(OrgChartError::InvalidData(
                "view offset must be finite".to_owned(),
            ));
        }
        Ok(Self {
            zoom,
            offset_x,
            offset_y,
        })
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn layout_to_screen(self, point: Point) -> Point {
        Point::new(
            point.x * self.zoom + self.offset_x,
            point.y * self.zoom + self.offset_y,
        )
    }

    #[must_use]
    pub fn screen_to_layout(self, point: Point) -> Point {
        Point::new(
            (point.x - self.offset_x) / self.zoom,
            (point.y - self.offset_y) / self.zoom,
        )
    }

    #[must_use]
    pub fn bounds_to_screen(self, bounds: Bounds) -> Bounds {
        let origin = self.layout_to_screen(Point::new(bounds.x, bounds.y));
        Bounds::new(
            origin.x,
            origin.y,
            bounds.width * self.zoom,
            bounds.height * self.zoom,
        )
    }

    /// Translates the view by a screen-space delta.
    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> OrgChartResult<()> {
        let offset_x = self.offset_x + delta_x;
        let offset_y = self.offset_y + delta_y;
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(OrgChartError::InvalidData(
                "pan delta must keep view offset finite".to_owned(),
            ));
        }
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        Ok(())
    }

    /// Multiplies zoom by `factor`, clamped to `limits`, keeping the layout
    /// point under `anchor` fixed on screen.
    ///
    /// Returns `true` when the zoom changed.
    pub fn zoom_at(&mut self, factor: f64, anchor: Point, limits: ZoomLimits) -> OrgChartResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(OrgChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.is_finite() {
            return Err(OrgChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        let next_zoom = limits.clamp(self.zoom * factor);
        if next_zoom == self.zoom {
            return Ok(false);
        }
        let anchored = self.screen_to_layout(anchor);
        self.zoom = next_zoom;
        self.offset_x = anchor.x - anchored.x * next_zoom;
        self.offset_y = anchor.y - anchored.y * next_zoom;
        Ok(true)
    }

    /// Moves the view so `layout_point` sits at the viewport center.
    pub fn center_on(&mut self, layout_point: Point, viewport: Viewport) -> OrgChartResult<()> {
        if !viewport.is_valid() {
            return Err(OrgChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !layout_point.is_finite() {
            return Err(OrgChartError::InvalidData(
                "center target must be finite".to_owned(),
            ));
        }
        let center = viewport.center();
        self.offset_x = center.x - layout_point.x * self.zoom;
        self.offset_y = center.y - layout_point.y * self.zoom;
        Ok(())
    }
}
