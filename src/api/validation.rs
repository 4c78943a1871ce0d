use crate::error::{OrgChartError, OrgChartResult};

use super::{LayoutMetrics, PointerBehavior, RenderStyle, ZoomBehavior};

pub(super) fn validate_render_style(style: RenderStyle) -> OrgChartResult<RenderStyle> {
    for color in [
        style.node_fill_color,
        style.node_border_color,
        style.highlight_border_color,
        style.highlight_fill_color,
        style.avatar_fill_color,
        style.avatar_text_color,
        style.name_text_color,
        style.role_text_color,
        style.toggle_fill_color,
        style.toggle_border_color,
        style.toggle_text_color,
        style.connector_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("node border width", style.node_border_width),
        ("node corner radius", style.node_corner_radius),
        ("highlight border width", style.highlight_border_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(OrgChartError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("connector width", style.connector_width),
        ("name font size", style.name_font_size_px),
        ("role font size", style.role_font_size_px),
        ("avatar font size", style.avatar_font_size_px),
        ("toggle font size", style.toggle_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(OrgChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    Ok(style)
}

pub(super) fn validate_layout_metrics(metrics: LayoutMetrics) -> OrgChartResult<LayoutMetrics> {
    for (name, value) in [
        ("node width", metrics.node_width),
        ("node height", metrics.node_height),
        ("level gap", metrics.level_gap),
        ("toggle size", metrics.toggle_size),
        ("avatar size", metrics.avatar_size),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(OrgChartError::InvalidData(format!(
                "layout {name} must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("sibling gap", metrics.sibling_gap),
        ("padding", metrics.padding),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(OrgChartError::InvalidData(format!(
                "layout {name} must be finite and >= 0"
            )));
        }
    }
    if metrics.avatar_size + 2.0 * metrics.padding > metrics.node_height {
        return Err(OrgChartError::InvalidData(
            "layout avatar plus padding must fit inside node height".to_owned(),
        ));
    }
    if metrics.toggle_size >= metrics.level_gap {
        return Err(OrgChartError::InvalidData(
            "layout toggle size must be smaller than level gap".to_owned(),
        ));
    }
    Ok(metrics)
}

pub(super) fn validate_zoom_behavior(behavior: ZoomBehavior) -> OrgChartResult<ZoomBehavior> {
    behavior.limits.validate()?;
    if !behavior.initial_zoom.is_finite()
        || behavior.initial_zoom < behavior.limits.min_zoom
        || behavior.initial_zoom > behavior.limits.max_zoom
    {
        return Err(OrgChartError::InvalidData(
            "initial zoom must be finite and inside zoom limits".to_owned(),
        ));
    }
    if !behavior.wheel_zoom_step_ratio.is_finite() || behavior.wheel_zoom_step_ratio <= 0.0 {
        return Err(OrgChartError::InvalidData(
            "wheel zoom step ratio must be finite and > 0".to_owned(),
        ));
    }
    if !behavior.button_zoom_factor.is_finite() || behavior.button_zoom_factor <= 1.0 {
        return Err(OrgChartError::InvalidData(
            "button zoom factor must be finite and > 1".to_owned(),
        ));
    }
    if !behavior.top_margin_px.is_finite() {
        return Err(OrgChartError::InvalidData(
            "top margin must be finite".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_pointer_behavior(
    behavior: PointerBehavior,
) -> OrgChartResult<PointerBehavior> {
    if !behavior.click_slop_px.is_finite() || behavior.click_slop_px < 0.0 {
        return Err(OrgChartError::InvalidData(
            "pointer click slop must be finite and >= 0".to_owned(),
        ));
    }
    Ok(behavior)
}
