use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OrgChartError, OrgChartResult};

/// Identifier of one person/role in the organization tree.
///
/// Ids are compared as opaque strings; integer ids are stored in their
/// decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! node_id_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for NodeId {
                fn from(value: $int) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

node_id_from_integer!(i32, i64, u32, u64, usize);

/// One entry of the organization hierarchy.
///
/// `children` order is meaningful: it is the left-to-right layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgNode {
    pub id: NodeId,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    #[must_use]
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: OrgNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = OrgNode>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Avatar initials: first letter of the first two words of `name`,
    /// uppercased. Falls back to `"?"` for blank names.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_owned()
        } else {
            initials
        }
    }
}

/// Tree depth (root included) that `OrgTree::from_json_str` always accepts.
pub const MAX_JSON_TREE_DEPTH: usize = 63;

/// Validated, read-only organization tree.
///
/// Owned `children` vectors already rule out cycles and shared parents; the
/// constructor additionally enforces non-empty, tree-wide unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgTree {
    root: OrgNode,
    len: usize,
}

impl OrgTree {
    pub fn new(root: OrgNode) -> OrgChartResult<Self> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        let mut stack = vec![&root];
        while let Some(node) = stack.pop() {
            if node.id.as_str().is_empty() {
                return Err(OrgChartError::InvalidTree(
                    "node id must not be empty".to_owned(),
                ));
            }
            if !seen.insert(&node.id) {
                return Err(OrgChartError::InvalidTree(format!(
                    "duplicate node id `{}`",
                    node.id
                )));
            }
            stack.extend(node.children.iter());
        }
        let len = seen.len();
        Ok(Self { root, len })
    }

    /// Parses a nested `{ id, name, role, children }` document.
    ///
    /// Each tree level costs two levels of JSON nesting (object and
    /// `children` array) against serde_json's recursion limit, so documents
    /// much deeper than [`MAX_JSON_TREE_DEPTH`] levels are rejected with
    /// `InvalidTree`.
    pub fn from_json_str(input: &str) -> OrgChartResult<Self> {
        let root: OrgNode = serde_json::from_str(input).map_err(|e| {
            if e.to_string().starts_with("recursion limit exceeded") {
                OrgChartError::InvalidTree(format!(
                    "tree json is nested deeper than {MAX_JSON_TREE_DEPTH} levels"
                ))
            } else {
                OrgChartError::InvalidData(format!("failed to parse tree: {e}"))
            }
        })?;
        Self::new(root)
    }

    pub fn to_json_pretty(&self) -> OrgChartResult<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| OrgChartError::InvalidData(format!("failed to serialize tree: {e}")))
    }

    #[must_use]
    pub fn root(&self) -> &OrgNode {
        &self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pre-order traversal, children visited in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &OrgNode> {
        PreOrder {
            stack: vec![&self.root],
        }
    }

    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&OrgNode> {
        self.iter().find(|node| &node.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Nodes from the root down to `id`, both ends included.
    #[must_use]
    pub fn path_to(&self, id: &NodeId) -> Option<Vec<&OrgNode>> {
        let mut path = Vec::new();
        if collect_path(&self.root, id, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Ids of every node that has at least one child.
    pub fn branch_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.iter()
            .filter(|node| !node.is_leaf())
            .map(|node| &node.id)
    }
}

struct PreOrder<'a> {
    stack: Vec<&'a OrgNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a OrgNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn collect_path<'a>(node: &'a OrgNode, target: &NodeId, path: &mut Vec<&'a OrgNode>) -> bool {
    path.push(node);
    if &node.id == target {
        return true;
    }
    for child in &node.children {
        if collect_path(child, target, path) {
            return true;
        }
    }
    path.pop();
    false
}
