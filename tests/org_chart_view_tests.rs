use approx::assert_relative_eq;
use orgchart_rs::OrgChartError;
use orgchart_rs::api::{MY_POSITION_TITLE, NotificationKind, OrgChart, OrgChartConfig};
use orgchart_rs::core::{NodeId, Point, SAMPLE_CURRENT_USER_ID, Viewport, sample_organization};
use orgchart_rs::render::NullRenderer;

fn chart(config: OrgChartConfig) -> OrgChart<NullRenderer> {
    OrgChart::new(NullRenderer::default(), sample_organization(), config).expect("chart init")
}

fn default_chart() -> OrgChart<NullRenderer> {
    chart(OrgChartConfig::new(Viewport::new(1200, 800)).with_highlighted_id(SAMPLE_CURRENT_USER_ID))
}

fn screen_center_of(chart: &OrgChart<NullRenderer>, id: &str) -> Point {
    let layout = chart.build_layout();
    let node_box = layout.node_box(&NodeId::from(id)).expect("node rendered");
    chart.view_transform().layout_to_screen(node_box.body.center())
}

#[test]
fn initial_view_centers_root_below_top_margin() {
    let chart = default_chart();
    let layout = chart.build_layout();
    let root = chart.view_transform().bounds_to_screen(layout.root().body);

    assert_relative_eq!(root.center().x, 600.0, epsilon = 1e-9);
    assert_relative_eq!(root.y, chart.zoom_behavior().top_margin_px, epsilon = 1e-9);
    assert_relative_eq!(chart.zoom(), 1.0);
}

#[test]
fn wheel_zoom_keeps_anchor_fixed() {
    let mut chart = default_chart();
    let anchor = Point::new(420.0, 260.0);
    let layout_before = chart.view_transform().screen_to_layout(anchor);

    let applied = chart.wheel_zoom(-120.0, anchor.x, anchor.y).expect("wheel zoom");

    assert_relative_eq!(applied, 1.1, epsilon = 1e-12);
    assert_relative_eq!(chart.zoom(), 1.1, epsilon = 1e-12);
    let layout_after = chart.view_transform().screen_to_layout(anchor);
    assert_relative_eq!(layout_after.x, layout_before.x, epsilon = 1e-9);
    assert_relative_eq!(layout_after.y, layout_before.y, epsilon = 1e-9);
}

#[test]
fn wheel_zoom_stops_at_limits() {
    let mut chart = chart(OrgChartConfig::new(Viewport::new(800, 600)).with_zoom_limits(0.5, 2.0));
    for _ in 0..40 {
        chart.wheel_zoom(-120.0, 400.0, 300.0).expect("zoom in");
    }
    assert_relative_eq!(chart.zoom(), 2.0);
    assert_relative_eq!(chart.wheel_zoom(-120.0, 400.0, 300.0).expect("clamped"), 1.0);

    for _ in 0..40 {
        chart.wheel_zoom(120.0, 400.0, 300.0).expect("zoom out");
    }
    assert_relative_eq!(chart.zoom(), 0.5);
}

#[test]
fn huge_wheel_deltas_land_exactly_on_zoom_limits() {
    let mut chart = default_chart();
    let limits = chart.zoom_behavior().limits;

    chart.wheel_zoom(1.0e6, 400.0, 300.0).expect("huge zoom out");
    assert_eq!(chart.zoom(), limits.min_zoom);

    chart.wheel_zoom(-1.0e6, 400.0, 300.0).expect("huge zoom in");
    assert_eq!(chart.zoom(), limits.max_zoom);

    let frame = chart.build_render_frame().expect("frame at max zoom");
    frame.validate().expect("finite geometry");
}

#[test]
fn zero_wheel_delta_is_a_no_op_and_nan_is_rejected() {
    let mut chart = default_chart();
    let before = chart.view_transform();
    assert_relative_eq!(chart.wheel_zoom(0.0, 10.0, 10.0).expect("zero delta"), 1.0);
    assert_eq!(chart.view_transform(), before);

    let err = chart.wheel_zoom(f64::NAN, 10.0, 10.0).expect_err("nan delta");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
}

#[test]
fn pinch_and_buttons_zoom_around_anchor_or_center() {
    let mut chart = default_chart();
    chart.pinch_zoom(1.5, 300.0, 200.0).expect("pinch");
    assert_relative_eq!(chart.zoom(), 1.5, epsilon = 1e-12);

    let center = chart.viewport().center();
    let layout_center = chart.view_transform().screen_to_layout(center);
    assert!(chart.zoom_in().expect("zoom in"));
    assert_relative_eq!(chart.zoom(), 1.8, epsilon = 1e-12);
    let after = chart.view_transform().screen_to_layout(center);
    assert_relative_eq!(after.x, layout_center.x, epsilon = 1e-9);
    assert_relative_eq!(after.y, layout_center.y, epsilon = 1e-9);

    assert!(chart.zoom_out().expect("zoom out"));
    assert_relative_eq!(chart.zoom(), 1.5, epsilon = 1e-12);

    let err = chart.pinch_zoom(0.0, 0.0, 0.0).expect_err("zero pinch");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
}

#[test]
fn reset_view_restores_initial_transform() {
    let mut chart = default_chart();
    let initial = chart.view_transform();
    chart.pan_by(-140.0, 75.0).expect("pan");
    chart.wheel_zoom(-240.0, 100.0, 100.0).expect("zoom");
    assert_ne!(chart.view_transform(), initial);

    chart.reset_view().expect("reset");
    assert_eq!(chart.view_transform(), initial);
}

#[test]
fn resize_keeps_the_centered_point() {
    let mut chart = default_chart();
    let before = chart
        .view_transform()
        .screen_to_layout(chart.viewport().center());

    chart.set_viewport(Viewport::new(600, 400)).expect("resize");
    let after = chart
        .view_transform()
        .screen_to_layout(chart.viewport().center());

    assert_relative_eq!(after.x, before.x, epsilon = 1e-9);
    assert_relative_eq!(after.y, before.y, epsilon = 1e-9);

    let err = chart
        .set_viewport(Viewport::new(0, 400))
        .expect_err("zero width");
    assert!(matches!(err, OrgChartError::InvalidViewport { .. }));
}

#[test]
fn go_to_my_position_centers_highlighted_node() {
    let mut chart = default_chart();
    assert!(chart.go_to_my_position().expect("go to position"));

    let center = screen_center_of(&chart, SAMPLE_CURRENT_USER_ID);
    let viewport_center = chart.viewport().center();
    assert_relative_eq!(center.x, viewport_center.x, epsilon = 1e-9);
    assert_relative_eq!(center.y, viewport_center.y, epsilon = 1e-9);

    let notifications = chart.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Position);
    assert_eq!(notifications[0].title, MY_POSITION_TITLE);
    assert!(notifications[0].description.contains("Ana Costa"));
}

#[test]
fn go_to_my_position_inside_collapsed_branch_does_not_expand() {
    let mut chart = default_chart();
    chart.toggle_collapse(&NodeId::from("eng-frontend"));
    chart.toggle_collapse(&NodeId::from("cto"));
    let before = chart.view_transform();

    assert!(!chart.go_to_my_position().expect("go to position"));

    assert_eq!(chart.view_transform(), before);
    assert!(chart.is_collapsed(&NodeId::from("eng-frontend")));
    let notifications = chart.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].description.contains("collapsed branch of Rafael Souza"));
}

#[test]
fn go_to_my_position_with_unknown_highlight_only_notifies() {
    let mut chart = chart(OrgChartConfig::new(Viewport::new(800, 600)).with_highlighted_id("nobody"));
    let before = chart.view_transform();

    assert!(!chart.go_to_my_position().expect("go to position"));

    assert_eq!(chart.view_transform(), before);
    let notifications = chart.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Position);
    assert!(notifications[0].description.contains("not part of this organization"));
}

#[test]
fn go_to_my_position_without_highlight_only_notifies() {
    let mut chart = chart(OrgChartConfig::new(Viewport::new(800, 600)));
    let before = chart.view_transform();

    assert!(!chart.go_to_my_position().expect("go to position"));
    assert_eq!(chart.view_transform(), before);
    assert_eq!(chart.pending_notifications(), 1);
}

#[test]
fn highlighted_node_is_drawn_with_highlight_style() {
    let chart = default_chart();
    let frame = chart.build_render_frame().expect("frame");
    let style = chart.render_style();
    let highlighted = frame
        .rects
        .iter()
        .filter(|rect| rect.fill_color == style.highlight_fill_color)
        .count();
    assert_eq!(highlighted, 1);

    let view = chart.node_view();
    let flagged: Vec<_> = view.iter().filter(|node| node.highlighted).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].id, NodeId::from(SAMPLE_CURRENT_USER_ID));
}

#[test]
fn invalid_configs_are_rejected() {
    let err = OrgChart::new(
        NullRenderer::default(),
        sample_organization(),
        OrgChartConfig::new(Viewport::new(0, 0)),
    )
    .err()
    .expect("zero viewport");
    assert!(matches!(err, OrgChartError::InvalidViewport { .. }));

    let err = OrgChart::new(
        NullRenderer::default(),
        sample_organization(),
        OrgChartConfig::new(Viewport::new(800, 600)).with_initial_zoom(9.0),
    )
    .err()
    .expect("initial zoom outside limits");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
}
