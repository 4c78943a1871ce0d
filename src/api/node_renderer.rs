//! Recursive render description of the organization tree.
//!
//! `render_org_node` is a pure function of the subtree, the collapsed map and
//! the highlighted id. Interactions are expressed as [`NodeAction`] values
//! attached to the clickable regions instead of callbacks; the chart
//! container dispatches them.

use crate::core::{CollapsedState, NodeId, OrgNode};

/// Toggle label shown while a node's children are hidden.
pub const COLLAPSED_TOGGLE_LABEL: &str = "+";
/// Toggle label shown while a node's children are rendered (U+2212).
pub const EXPANDED_TOGGLE_LABEL: &str = "\u{2212}";

/// Interaction emitted by a clicked region of a rendered node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeAction {
    /// Body click: surfaces the node to the host.
    Select(NodeId),
    /// Toggle-control click: flips the node's collapsed flag.
    ToggleCollapse(NodeId),
}

impl NodeAction {
    #[must_use]
    pub fn node_id(&self) -> &NodeId {
        match self {
            Self::Select(id) | Self::ToggleCollapse(id) => id,
        }
    }
}

/// Read-only UI state handed down through every recursive call.
#[derive(Debug, Clone, Copy)]
pub struct NodeRenderContext<'a> {
    pub highlighted_id: Option<&'a NodeId>,
    pub collapsed: &'a CollapsedState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub collapsed: bool,
    pub label: &'static str,
    pub action: NodeAction,
}

/// One rendered node. `children` is empty for leaves and for collapsed
/// nodes; a collapsed node's subtree is never visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub id: NodeId,
    pub name: String,
    pub role: String,
    pub initials: String,
    pub highlighted: bool,
    pub on_click: NodeAction,
    pub toggle: Option<ToggleView>,
    pub children: Vec<NodeView>,
}

impl NodeView {
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.toggle.as_ref().is_some_and(|toggle| toggle.collapsed)
    }

    /// Rendered nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeView> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let view = stack.pop()?;
            stack.extend(view.children.iter().rev());
            Some(view)
        })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&NodeView> {
        self.iter().find(|view| &view.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }
}

/// Renders `node` and, unless it is collapsed, its children in order.
#[must_use]
pub fn render_org_node(node: &OrgNode, context: NodeRenderContext<'_>) -> NodeView {
    let collapsed = context.collapsed.is_collapsed(&node.id);
    let toggle = (!node.is_leaf()).then(|| ToggleView {
        collapsed,
        label: if collapsed {
            COLLAPSED_TOGGLE_LABEL
        } else {
            EXPANDED_TOGGLE_LABEL
        },
        action: NodeAction::ToggleCollapse(node.id.clone()),
    });
    let children = if collapsed {
        Vec::new()
    } else {
        node.children
            .iter()
            .map(|child| render_org_node(child, context))
            .collect()
    };

    NodeView {
        id: node.id.clone(),
        name: node.name.clone(),
        role: node.role.clone(),
        initials: node.initials(),
        highlighted: context.highlighted_id == Some(&node.id),
        on_click: NodeAction::Select(node.id.clone()),
        toggle,
        children,
    }
}
