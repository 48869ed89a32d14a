//! Tree Node Entity
//!
//! One checklist entry in nested form: either a folder (has a children
//! sequence, possibly empty) or a file (no children sequence).

use serde::{Deserialize, Serialize};

/// Stable node identifier, unique for the lifetime of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source. Never hands out the same id twice.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start above every id already present in `roots`
    pub fn after(roots: &[TreeNode]) -> Self {
        fn max_id(nodes: &[TreeNode]) -> u64 {
            nodes
                .iter()
                .map(|n| n.id.0.max(n.children.as_deref().map(max_id).unwrap_or(0)))
                .max()
                .unwrap_or(0)
        }
        Self { next: max_id(roots).saturating_add(1) }
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Node type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
    /// Type not determined yet
    #[default]
    Unset,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Folder => "folder",
            NodeKind::File => "file",
            NodeKind::Unset => "unset",
        }
    }
}

/// A checklist entry with its (optional) ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Text shown to the user; empty while a new entry is being edited
    pub label: String,
    pub id: NodeId,
    #[serde(default)]
    pub kind: NodeKind,
    /// `None` = leaf, `Some(vec![])` = empty folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Create a leaf (no children sequence)
    pub fn leaf(id: NodeId, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            id,
            kind,
            children: None,
        }
    }

    /// Create a container with an empty children sequence
    pub fn container(id: NodeId, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            id,
            kind,
            children: Some(Vec::new()),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Non-empty children sequence, i.e. expandable in the UI
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    /// Number of nodes in this subtree, self included
    pub fn count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |c| c.iter().map(TreeNode::count).sum())
    }

    /// Depth-first lookup within this subtree
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .as_deref()?
            .iter()
            .find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .as_deref_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}
