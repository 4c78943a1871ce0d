//! Top-down tree layout for rendered node views.
//!
//! Each subtree reserves `max(node_width, children span)` horizontally; a
//! parent is centered over its children's span and every level sits
//! `node_height + level_gap` below the previous one. Coordinates are in
//! layout space with the root subtree's top-left corner at the origin.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Bounds, NodeId, Point};

use super::{NodeAction, NodeView};

/// Card geometry in layout units (pixels at zoom 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub node_width: f64,
    pub node_height: f64,
    pub sibling_gap: f64,
    pub level_gap: f64,
    pub toggle_size: f64,
    pub avatar_size: f64,
    pub padding: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            node_height: 64.0,
            sibling_gap: 24.0,
            level_gap: 56.0,
            toggle_size: 20.0,
            avatar_size: 40.0,
            padding: 12.0,
        }
    }
}

/// Placed node card.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub id: NodeId,
    pub depth: usize,
    pub body: Bounds,
    pub avatar: Bounds,
    /// Present only for nodes with children; straddles the body's bottom edge.
    pub toggle: Option<Bounds>,
    pub name: String,
    pub role: String,
    pub initials: String,
    pub highlighted: bool,
    pub toggle_label: Option<&'static str>,
    pub on_click: NodeAction,
    pub toggle_action: Option<NodeAction>,
}

/// Elbow connector from a parent card down to one child card.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub parent: NodeId,
    pub child: NodeId,
    pub segments: SmallVec<[(Point, Point); 3]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Cards in pre-order, matching `NodeView::iter`.
    pub boxes: Vec<NodeBox>,
    pub connectors: Vec<Connector>,
    /// Union of every card (toggles included).
    pub bounds: Bounds,
}

impl ChartLayout {
    #[must_use]
    pub fn node_box(&self, id: &NodeId) -> Option<&NodeBox> {
        self.boxes.iter().find(|node_box| &node_box.id == id)
    }

    #[must_use]
    pub fn root(&self) -> &NodeBox {
        &self.boxes[0]
    }
}

struct Measured {
    width: f64,
    children: Vec<Measured>,
}

fn measure(view: &NodeView, metrics: LayoutMetrics) -> Measured {
    let children: Vec<Measured> = view
        .children
        .iter()
        .map(|child| measure(child, metrics))
        .collect();
    let span = children_span(&children, metrics);
    Measured {
        width: metrics.node_width.max(span),
        children,
    }
}

fn children_span(children: &[Measured], metrics: LayoutMetrics) -> f64 {
    if children.is_empty() {
        return 0.0;
    }
    let widths: f64 = children.iter().map(|child| child.width).sum();
    widths + metrics.sibling_gap * (children.len() - 1) as f64
}

/// Lays out `view` and every rendered descendant.
#[must_use]
pub fn layout_node_view(view: &NodeView, metrics: LayoutMetrics) -> ChartLayout {
    let measured = measure(view, metrics);
    let mut layout = ChartLayout {
        boxes: Vec::with_capacity(view.node_count()),
        connectors: Vec::new(),
        bounds: Bounds::new(0.0, 0.0, 0.0, 0.0),
    };
    place(view, &measured, 0.0, 0, metrics, &mut layout);

    layout.bounds = layout
        .boxes
        .iter()
        .map(|node_box| match node_box.toggle {
            Some(toggle) => node_box.body.union(toggle),
            None => node_box.body,
        })
        .reduce(Bounds::union)
        .unwrap_or(layout.bounds);
    layout
}

fn place(
    view: &NodeView,
    measured: &Measured,
    left: f64,
    depth: usize,
    metrics: LayoutMetrics,
    layout: &mut ChartLayout,
) {
    let top = depth as f64 * (metrics.node_height + metrics.level_gap);
    let center_x = left + measured.width / 2.0;
    let body = Bounds::new(
        center_x - metrics.node_width / 2.0,
        top,
        metrics.node_width,
        metrics.node_height,
    );
    let avatar = Bounds::new(
        body.x + metrics.padding,
        body.y + (metrics.node_height - metrics.avatar_size) / 2.0,
        metrics.avatar_size,
        metrics.avatar_size,
    );
    let toggle = view.toggle.as_ref().map(|_| {
        Bounds::new(
            center_x - metrics.toggle_size / 2.0,
            body.bottom() - metrics.toggle_size / 2.0,
            metrics.toggle_size,
            metrics.toggle_size,
        )
    });

    layout.boxes.push(NodeBox {
        id: view.id.clone(),
        depth,
        body,
        avatar,
        toggle,
        name: view.name.clone(),
        role: view.role.clone(),
        initials: view.initials.clone(),
        highlighted: view.highlighted,
        toggle_label: view.toggle.as_ref().map(|toggle| toggle.label),
        on_click: view.on_click.clone(),
        toggle_action: view.toggle.as_ref().map(|toggle| toggle.action.clone()),
    });

    if view.children.is_empty() {
        return;
    }

    let span = children_span(&measured.children, metrics);
    let parent_anchor = Point::new(
        center_x,
        toggle.map_or(body.bottom(), |toggle| toggle.bottom()),
    );
    let rail_y = body.bottom() + metrics.level_gap / 2.0;
    let child_top = top + metrics.node_height + metrics.level_gap;

    let mut child_left = left + (measured.width - span) / 2.0;
    for (child, child_measured) in view.children.iter().zip(&measured.children) {
        let child_center_x = child_left + child_measured.width / 2.0;
        layout.connectors.push(Connector {
            parent: view.id.clone(),
            child: child.id.clone(),
            segments: elbow_segments(parent_anchor, rail_y, Point::new(child_center_x, child_top)),
        });
        place(child, child_measured, child_left, depth + 1, metrics, layout);
        child_left += child_measured.width + metrics.sibling_gap;
    }
}

/// Vertical drop to the rail, horizontal run, vertical drop into the child.
/// Zero-length runs are omitted.
fn elbow_segments(from: Point, rail_y: f64, to: Point) -> SmallVec<[(Point, Point); 3]> {
    let mut segments = SmallVec::new();
    let rail_start = Point::new(from.x, rail_y);
    let rail_end = Point::new(to.x, rail_y);
    if rail_y > from.y {
        segments.push((from, rail_start));
    }
    if rail_start.x != rail_end.x {
        segments.push((rail_start, rail_end));
    }
    segments.push((rail_end, to));
    segments
}
