use crate::error::{OrgChartError, OrgChartResult};

const WHEEL_STEP_UNITS: f64 = 120.0;

/// Zoom factor for a wheel event: one 120-unit notch scales by
/// `1 + zoom_step_ratio`, negative deltas zoom in.
pub(super) fn resolve_wheel_zoom_factor(
    wheel_delta_y: f64,
    zoom_step_ratio: f64,
) -> OrgChartResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(OrgChartError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let factor = (1.0 + zoom_step_ratio).powf(-normalized_steps);
    if factor.is_nan() {
        return Err(OrgChartError::InvalidData(
            "computed wheel zoom factor must be a number".to_owned(),
        ));
    }
    // Huge deltas underflow/overflow; saturate so zoom limits do the clamping.
    Ok(Some(factor.clamp(f64::MIN_POSITIVE, f64::MAX)))
}

pub(super) fn resolve_pinch_zoom_factor(pinch_scale_factor: f64) -> OrgChartResult<Option<f64>> {
    if !pinch_scale_factor.is_finite() || pinch_scale_factor <= 0.0 {
        return Err(OrgChartError::InvalidData(
            "pinch zoom factor must be finite and > 0".to_owned(),
        ));
    }
    if (pinch_scale_factor - 1.0).abs() <= f64::EPSILON {
        return Ok(None);
    }
    Ok(Some(pinch_scale_factor))
}
