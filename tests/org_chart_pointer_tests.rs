use std::cell::RefCell;
use std::rc::Rc;

use orgchart_rs::OrgChartError;
use orgchart_rs::api::{NodeAction, NotificationKind, OrgChart, OrgChartConfig};
use orgchart_rs::core::{NodeId, Point, Viewport, sample_organization};
use orgchart_rs::extensions::{OrgChartEvent, OrgChartPlugin, PluginContext};
use orgchart_rs::interaction::InteractionMode;
use orgchart_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    events: Rc<RefCell<Vec<OrgChartEvent>>>,
}

impl OrgChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: &OrgChartEvent, _context: PluginContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn chart_with_recorder() -> (OrgChart<NullRenderer>, Rc<RefCell<Vec<OrgChartEvent>>>) {
    let mut chart = OrgChart::new(
        NullRenderer::default(),
        sample_organization(),
        OrgChartConfig::new(Viewport::new(1280, 800)),
    )
    .expect("chart init");
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin {
            events: Rc::clone(&events),
        }))
        .expect("register recorder");
    (chart, events)
}

fn body_center(chart: &OrgChart<NullRenderer>, id: &str) -> Point {
    let layout = chart.build_layout();
    let node_box = layout.node_box(&NodeId::from(id)).expect("node rendered");
    chart.view_transform().layout_to_screen(node_box.body.center())
}

fn toggle_center(chart: &OrgChart<NullRenderer>, id: &str) -> Point {
    let layout = chart.build_layout();
    let toggle = layout
        .node_box(&NodeId::from(id))
        .and_then(|node_box| node_box.toggle)
        .expect("toggle rendered");
    chart.view_transform().layout_to_screen(toggle.center())
}

fn node_clicks(events: &Rc<RefCell<Vec<OrgChartEvent>>>) -> Vec<NodeId> {
    events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            OrgChartEvent::NodeClicked { id } => Some(id.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn body_click_fires_node_click_exactly_once() {
    let (mut chart, events) = chart_with_recorder();
    let point = body_center(&chart, "cto");

    chart.pointer_down(point.x, point.y).expect("down");
    let action = chart.pointer_up(point.x, point.y).expect("up");

    assert_eq!(action, Some(NodeAction::Select(NodeId::from("cto"))));
    assert_eq!(node_clicks(&events), vec![NodeId::from("cto")]);

    let notifications = chart.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::NodeInfo);
    assert_eq!(notifications[0].title, "Rafael Souza");
    assert_eq!(notifications[0].description, "Chief Technology Officer");
}

#[test]
fn toggle_click_collapses_without_firing_node_click() {
    let (mut chart, events) = chart_with_recorder();
    let point = toggle_center(&chart, "cto");

    let action = chart.click_at(point.x, point.y).expect("click");

    assert_eq!(action, Some(NodeAction::ToggleCollapse(NodeId::from("cto"))));
    assert!(chart.is_collapsed(&NodeId::from("cto")));
    assert!(node_clicks(&events).is_empty());
    assert_eq!(chart.pending_notifications(), 0);
    assert!(!chart.visible_node_ids().contains(&NodeId::from("eng-frontend")));
}

#[test]
fn click_does_not_change_highlighted_node() {
    let (mut chart, _events) = chart_with_recorder();
    chart.set_highlighted_id(Some(NodeId::from("cfo")));
    let point = body_center(&chart, "cpo");

    chart.click_at(point.x, point.y).expect("click");

    assert_eq!(chart.highlighted_id(), Some(&NodeId::from("cfo")));
}

#[test]
fn empty_canvas_click_dispatches_nothing() {
    let (mut chart, events) = chart_with_recorder();
    let action = chart.click_at(2.0, 790.0).expect("click");
    assert_eq!(action, None);
    assert!(node_clicks(&events).is_empty());
}

#[test]
fn drag_beyond_slop_pans_and_suppresses_click() {
    let (mut chart, events) = chart_with_recorder();
    let start = body_center(&chart, "ceo");
    let (offset_x, offset_y) = chart.view_transform().offset();

    chart.pointer_down(start.x, start.y).expect("down");
    assert!(chart.pointer_move(start.x + 30.0, start.y + 10.0).expect("move"));
    assert_eq!(chart.interaction_mode(), InteractionMode::Panning);
    assert!(chart.pointer_move(start.x + 50.0, start.y + 20.0).expect("move"));
    let action = chart.pointer_up(start.x + 50.0, start.y + 20.0).expect("up");

    assert_eq!(action, None);
    let (panned_x, panned_y) = chart.view_transform().offset();
    assert!((panned_x - offset_x - 50.0).abs() < 1e-9);
    assert!((panned_y - offset_y - 20.0).abs() < 1e-9);
    assert!(node_clicks(&events).is_empty());

    let recorded = events.borrow();
    assert!(recorded.contains(&OrgChartEvent::PanStarted));
    assert_eq!(recorded.last(), Some(&OrgChartEvent::PanEnded));
}

#[test]
fn jitter_within_slop_still_counts_as_click() {
    let (mut chart, events) = chart_with_recorder();
    let start = body_center(&chart, "cfo");
    let before = chart.view_transform();

    chart.pointer_down(start.x, start.y).expect("down");
    assert!(!chart.pointer_move(start.x + 2.0, start.y - 1.0).expect("move"));
    chart.pointer_up(start.x + 2.0, start.y - 1.0).expect("up");

    assert_eq!(chart.view_transform(), before);
    assert_eq!(node_clicks(&events), vec![NodeId::from("cfo")]);
}

#[test]
fn cancel_abandons_press() {
    let (mut chart, events) = chart_with_recorder();
    let start = body_center(&chart, "cfo");
    chart.pointer_down(start.x, start.y).expect("down");
    chart.pointer_cancel();

    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);
    assert_eq!(chart.pointer_up(start.x, start.y).expect("up"), None);
    assert!(node_clicks(&events).is_empty());
}

#[test]
fn non_finite_pointer_is_rejected() {
    let (mut chart, _events) = chart_with_recorder();
    let err = chart.pointer_down(f64::NAN, 10.0).expect_err("nan rejected");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
    assert_eq!(chart.action_at(f64::INFINITY, 0.0), None);
}

#[test]
fn unknown_node_click_is_an_error() {
    let (mut chart, events) = chart_with_recorder();
    let err = chart
        .handle_node_click(&NodeId::from("nobody"))
        .expect_err("unknown id");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
    assert!(node_clicks(&events).is_empty());
}
