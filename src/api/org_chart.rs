use tracing::{debug, trace, warn};

use crate::core::{CollapsedState, NodeId, OrgTree, ViewTransform, Viewport};
use crate::error::{OrgChartError, OrgChartResult};
use crate::extensions::{OrgChartEvent, OrgChartPlugin};
use crate::interaction::InteractionState;
use crate::render::{RenderFrame, Renderer};

use super::validation::{
    validate_layout_metrics, validate_pointer_behavior, validate_render_style,
    validate_zoom_behavior,
};
use super::{
    ChartLayout, LayoutMetrics, NodeRenderContext, NodeView, NotificationCenter, OrgChartConfig,
    PointerBehavior, RenderStyle, ZoomBehavior, build_render_frame, layout_node_view,
    render_org_node,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Organization chart container consumed by host applications.
///
/// Owns every piece of mutable UI state for the chart screen (collapsed
/// nodes, highlighted node, search text, pan/zoom transform, pending
/// notifications). The tree itself is read-only; each render derives a fresh
/// `NodeView` from it.
pub struct OrgChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) tree: OrgTree,
    pub(super) viewport: Viewport,
    pub(super) collapsed: CollapsedState,
    pub(super) highlighted_id: Option<NodeId>,
    pub(super) search_term: String,
    pub(super) transform: ViewTransform,
    pub(super) zoom_behavior: ZoomBehavior,
    pub(super) pointer_behavior: PointerBehavior,
    pub(super) metrics: LayoutMetrics,
    pub(super) style: RenderStyle,
    pub(super) interaction: InteractionState,
    pub(super) notifications: NotificationCenter,
    pub(super) plugins: Vec<Box<dyn OrgChartPlugin>>,
}

impl<R: Renderer> OrgChart<R> {
    /// Creates a chart with every node expanded and the view reset so the
    /// root card is centered horizontally below the top margin.
    pub fn new(renderer: R, tree: OrgTree, config: OrgChartConfig) -> OrgChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(OrgChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        let zoom_behavior = validate_zoom_behavior(config.zoom_behavior)?;
        let pointer_behavior = validate_pointer_behavior(config.pointer_behavior)?;
        let metrics = validate_layout_metrics(config.layout_metrics)?;

        if let Some(id) = &config.highlighted_id {
            if !tree.contains(id) {
                warn!(%id, "highlighted id is not part of the tree; nothing will be highlighted");
            }
        }

        let mut chart = Self {
            renderer,
            tree,
            viewport: config.viewport,
            collapsed: CollapsedState::new(),
            highlighted_id: config.highlighted_id,
            search_term: String::new(),
            transform: ViewTransform::default(),
            zoom_behavior,
            pointer_behavior,
            metrics,
            style: RenderStyle::default(),
            interaction: InteractionState::default(),
            notifications: NotificationCenter::new(config.notification_capacity),
            plugins: Vec::new(),
        };
        chart.transform = chart.initial_transform()?;
        debug!(
            nodes = chart.tree.len(),
            width = chart.viewport.width,
            height = chart.viewport.height,
            zoom = chart.transform.zoom(),
            "org chart initialized"
        );
        Ok(chart)
    }

    #[must_use]
    pub fn tree(&self) -> &OrgTree {
        &self.tree
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout_metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> OrgChartResult<()> {
        self.style = validate_render_style(style)?;
        Ok(())
    }

    /// Current render description of the tree.
    #[must_use]
    pub fn node_view(&self) -> NodeView {
        render_org_node(
            self.tree.root(),
            NodeRenderContext {
                highlighted_id: self.highlighted_id.as_ref(),
                collapsed: &self.collapsed,
            },
        )
    }

    /// Ids of every rendered node in pre-order.
    #[must_use]
    pub fn visible_node_ids(&self) -> Vec<NodeId> {
        self.node_view().iter().map(|view| view.id.clone()).collect()
    }

    #[must_use]
    pub fn build_layout(&self) -> ChartLayout {
        layout_node_view(&self.node_view(), self.metrics)
    }

    pub fn build_render_frame(&self) -> OrgChartResult<RenderFrame> {
        let layout = self.build_layout();
        let frame = build_render_frame(
            &layout,
            self.transform,
            self.viewport,
            self.metrics,
            self.style,
        );
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> OrgChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.after_render(&frame);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// GTK draw callbacks use this path so the renderer stays free of
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> OrgChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.after_render(&frame);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn after_render(&mut self, frame: &RenderFrame) {
        let node_count = self.node_view().node_count();
        trace!(
            node_count,
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "rendered org chart frame"
        );
        self.emit_event(OrgChartEvent::Rendered { node_count });
    }

    /// View with the initial zoom and the root card centered horizontally.
    pub(super) fn initial_transform(&self) -> OrgChartResult<ViewTransform> {
        let zoom = self.zoom_behavior.initial_zoom;
        let layout = self.build_layout();
        let root_center_x = layout.root().body.center().x;
        ViewTransform::new(
            zoom,
            self.viewport.center().x - root_center_x * zoom,
            self.zoom_behavior.top_margin_px,
        )
    }
}
