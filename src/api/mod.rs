mod behavior;
mod chart_config;
mod collapse_controller;
mod layout;
mod node_renderer;
mod notifications;
mod org_chart;
mod plugin_registry;
mod pointer_controller;
mod render_frame_builder;
mod render_style;
mod selection_controller;
mod snapshot;
mod validation;
mod view_controller;
mod zoom;

pub use behavior::{PointerBehavior, ZoomBehavior};
pub use chart_config::OrgChartConfig;
pub use hit_test::hit_test;
pub use layout::{ChartLayout, Connector, LayoutMetrics, NodeBox, layout_node_view};
pub use node_renderer::{
    COLLAPSED_TOGGLE_LABEL, EXPANDED_TOGGLE_LABEL, NodeAction, NodeRenderContext, NodeView,
    ToggleView, render_org_node,
};
pub use notifications::{
    NOT_IMPLEMENTED_TITLE, Notification, NotificationCenter, NotificationKind,
};
pub use org_chart::OrgChart;
pub use render_frame_builder::build_render_frame;
pub use render_style::RenderStyle;
pub use snapshot::{
    ORG_CHART_SNAPSHOT_JSON_SCHEMA_V1, OrgChartSnapshot, OrgChartSnapshotJsonContractV1,
};
pub use view_controller::MY_POSITION_TITLE;
