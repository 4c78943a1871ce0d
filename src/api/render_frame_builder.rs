use crate::core::{Bounds, ViewTransform, Viewport};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartLayout, LayoutMetrics, NodeBox, RenderStyle};

/// Converts a laid-out chart into screen-space primitives.
///
/// Connectors are emitted before cards, and each card emits body, avatar
/// and toggle rects followed by initials, name, role and toggle label.
#[must_use]
pub fn build_render_frame(
    layout: &ChartLayout,
    transform: ViewTransform,
    viewport: Viewport,
    metrics: LayoutMetrics,
    style: RenderStyle,
) -> RenderFrame {
    let zoom = transform.zoom();
    let mut frame = RenderFrame::new(viewport);

    let connector_width = style.connector_width * zoom;
    for connector in &layout.connectors {
        for (start, end) in &connector.segments {
            let start = transform.layout_to_screen(*start);
            let end = transform.layout_to_screen(*end);
            frame.lines.push(LinePrimitive::new(
                start.x,
                start.y,
                end.x,
                end.y,
                connector_width,
                style.connector_color,
            ));
        }
    }

    for node_box in &layout.boxes {
        push_node_card(&mut frame, node_box, transform, metrics, style);
    }

    frame
}

fn push_node_card(
    frame: &mut RenderFrame,
    node_box: &NodeBox,
    transform: ViewTransform,
    metrics: LayoutMetrics,
    style: RenderStyle,
) {
    let zoom = transform.zoom();
    let body = transform.bounds_to_screen(node_box.body);
    let (fill, border_color, border_width) = if node_box.highlighted {
        (
            style.highlight_fill_color,
            style.highlight_border_color,
            style.highlight_border_width,
        )
    } else {
        (
            style.node_fill_color,
            style.node_border_color,
            style.node_border_width,
        )
    };
    frame.rects.push(
        rect_for(body, fill)
            .with_border(border_width * zoom, border_color)
            .with_corner_radius(style.node_corner_radius * zoom),
    );

    let avatar = transform.bounds_to_screen(node_box.avatar);
    frame.rects.push(
        rect_for(avatar, style.avatar_fill_color).with_corner_radius(avatar.width / 2.0),
    );

    let toggle = node_box
        .toggle
        .map(|toggle| transform.bounds_to_screen(toggle));
    if let Some(toggle) = toggle {
        frame.rects.push(
            rect_for(toggle, style.toggle_fill_color)
                .with_border(zoom, style.toggle_border_color)
                .with_corner_radius(toggle.width / 2.0),
        );
    }

    let avatar_font = style.avatar_font_size_px * zoom;
    frame.texts.push(
        TextPrimitive::new(
            node_box.initials.as_str(),
            avatar.center().x,
            avatar.center().y - avatar_font / 2.0,
            avatar_font,
            style.avatar_text_color,
            TextHAlign::Center,
        )
        .bold(),
    );

    let text_x = avatar.right() + metrics.padding * zoom;
    let name_font = style.name_font_size_px * zoom;
    let role_font = style.role_font_size_px * zoom;
    let text_block_top = body.center().y - (name_font + role_font) / 2.0;
    if !node_box.name.is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                node_box.name.as_str(),
                text_x,
                text_block_top,
                name_font,
                style.name_text_color,
                TextHAlign::Left,
            )
            .bold(),
        );
    }
    if !node_box.role.is_empty() {
        frame.texts.push(TextPrimitive::new(
            node_box.role.as_str(),
            text_x,
            text_block_top + name_font,
            role_font,
            style.role_text_color,
            TextHAlign::Left,
        ));
    }

    if let (Some(toggle), Some(label)) = (toggle, node_box.toggle_label) {
        let toggle_font = style.toggle_font_size_px * zoom;
        frame.texts.push(TextPrimitive::new(
            label,
            toggle.center().x,
            toggle.center().y - toggle_font / 2.0,
            toggle_font,
            style.toggle_text_color,
            TextHAlign::Center,
        ));
    }
}

fn rect_for(bounds: Bounds, fill: crate::render::Color) -> RectPrimitive {
    RectPrimitive::new(bounds.x, bounds.y, bounds.width, bounds.height, fill)
}

#[cfg(test)]
mod tests {
    use super::build_render_frame;
    use crate::api::{
        EXPANDED_TOGGLE_LABEL, LayoutMetrics, NodeRenderContext, RenderStyle, layout_node_view,
        render_org_node,
    };
    use crate::core::{CollapsedState, NodeId, OrgNode, ViewTransform, Viewport};

    #[test]
    fn frame_contains_cards_connectors_and_labels() {
        let root = OrgNode::new(1, "Ada Lovelace", "CEO").with_child(OrgNode::new(2, "Bob", ""));
        let collapsed = CollapsedState::new();
        let highlighted = NodeId::from(2);
        let view = render_org_node(
            &root,
            NodeRenderContext {
                highlighted_id: Some(&highlighted),
                collapsed: &collapsed,
            },
        );
        let metrics = LayoutMetrics::default();
        let layout = layout_node_view(&view, metrics);
        let style = RenderStyle::default();
        let frame = build_render_frame(
            &layout,
            ViewTransform::default(),
            Viewport::new(800, 600),
            metrics,
            style,
        );

        frame.validate().expect("valid frame");
        // root: body + avatar + toggle, child: body + avatar
        assert_eq!(frame.rects.len(), 5);
        assert_eq!(frame.lines.len(), 2);
        assert!(frame.has_text("AL"));
        assert!(frame.has_text("Ada Lovelace"));
        assert!(frame.has_text("CEO"));
        assert!(frame.has_text(EXPANDED_TOGGLE_LABEL));
        // empty role is skipped
        assert_eq!(frame.texts.len(), 3 + 1 + 2);
        let highlighted_rects = frame
            .rects
            .iter()
            .filter(|rect| rect.border_color == style.highlight_border_color)
            .count();
        assert_eq!(highlighted_rects, 1);
    }

    #[test]
    fn zoom_scales_geometry_and_fonts() {
        let root = OrgNode::new(1, "Ada", "CEO");
        let collapsed = CollapsedState::new();
        let view = render_org_node(
            &root,
            NodeRenderContext {
                highlighted_id: None,
                collapsed: &collapsed,
            },
        );
        let metrics = LayoutMetrics::default();
        let layout = layout_node_view(&view, metrics);
        let style = RenderStyle::default();
        let frame = build_render_frame(
            &layout,
            ViewTransform::new(2.0, 0.0, 0.0).expect("transform"),
            Viewport::new(800, 600),
            metrics,
            style,
        );
        assert_eq!(frame.rects[0].width, metrics.node_width * 2.0);
        let name = frame
            .texts
            .iter()
            .find(|text| text.text == "Ada")
            .expect("name");
        assert_eq!(name.font_size_px, style.name_font_size_px * 2.0);
    }
}
