//! Tree Flattener
//!
//! Projects the nested forest into a pre-order list of depth-tagged rows.
//! Rows are shared as `Arc`s and reused across passes when nothing about
//! them changed, so the view can tell untouched rows apart by pointer.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::node::{NodeId, NodeKind, TreeNode};

/// One row of the flattened tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatViewNode {
    pub label: String,
    pub id: NodeId,
    pub kind: NodeKind,
    /// Nesting depth, roots are 0
    pub depth: usize,
    /// Source had a non-empty children sequence when flattened
    pub expandable: bool,
}

/// Rebuildable flat projection plus nested <-> flat lookup tables
#[derive(Debug, Default)]
pub struct TreeFlattener {
    nodes: Vec<Arc<FlatViewNode>>,
    /// nested -> flat
    flat_by_id: HashMap<NodeId, Arc<FlatViewNode>>,
    /// flat -> nested, as an index path from the root sequence
    source_paths: HashMap<NodeId, Vec<usize>>,
}

struct Pass<'p> {
    previous: &'p HashMap<NodeId, Arc<FlatViewNode>>,
    nodes: Vec<Arc<FlatViewNode>>,
    flat_by_id: HashMap<NodeId, Arc<FlatViewNode>>,
    source_paths: HashMap<NodeId, Vec<usize>>,
    path: Vec<usize>,
    reused: usize,
}

impl Pass<'_> {
    fn collect(&mut self, siblings: &[TreeNode], depth: usize) {
        for (index, node) in siblings.iter().enumerate() {
            self.path.push(index);
            let flat = self.project(node, depth);
            self.flat_by_id.insert(node.id, flat.clone());
            self.source_paths.insert(node.id, self.path.clone());
            self.nodes.push(flat);
            if let Some(children) = node.children.as_deref() {
                self.collect(children, depth + 1);
            }
            self.path.pop();
        }
    }

    fn project(&mut self, node: &TreeNode, depth: usize) -> Arc<FlatViewNode> {
        let expandable = node.has_children();
        if let Some(prev) = self.previous.get(&node.id) {
            if prev.label == node.label
                && prev.kind == node.kind
                && prev.depth == depth
                && prev.expandable == expandable
            {
                self.reused += 1;
                return prev.clone();
            }
        }
        Arc::new(FlatViewNode {
            label: node.label.clone(),
            id: node.id,
            kind: node.kind,
            depth,
            expandable,
        })
    }
}

impl TreeFlattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the whole forest in pre-order.
    ///
    /// Lookup tables are rebuilt from scratch, so rows of removed nodes are
    /// dropped here rather than accumulating.
    pub fn flatten(&mut self, roots: &[TreeNode]) -> &[Arc<FlatViewNode>] {
        let previous = std::mem::take(&mut self.flat_by_id);
        let mut pass = Pass {
            previous: &previous,
            nodes: Vec::with_capacity(previous.len()),
            flat_by_id: HashMap::with_capacity(previous.len()),
            source_paths: HashMap::with_capacity(previous.len()),
            path: Vec::new(),
            reused: 0,
        };
        pass.collect(roots, 0);

        debug!("Flattened {} nodes ({} reused)", pass.nodes.len(), pass.reused);
        self.nodes = pass.nodes;
        self.flat_by_id = pass.flat_by_id;
        self.source_paths = pass.source_paths;
        &self.nodes
    }

    /// Rows of the last pass, every node included
    pub fn nodes(&self) -> &[Arc<FlatViewNode>] {
        &self.nodes
    }

    /// Rows whose ancestors are all expanded, in pre-order
    pub fn visible(&self, is_expanded: impl Fn(NodeId) -> bool) -> Vec<Arc<FlatViewNode>> {
        // open[d]: rows at depth d are currently shown
        let mut open = vec![true];
        let mut rows = Vec::new();
        for node in &self.nodes {
            open.truncate(node.depth + 1);
            let shown = open.get(node.depth).copied().unwrap_or(false);
            if shown {
                rows.push(node.clone());
            }
            open.push(shown && node.expandable && is_expanded(node.id));
        }
        rows
    }

    /// Latest flat projection of a nested node
    pub fn flat_node(&self, id: NodeId) -> Option<&Arc<FlatViewNode>> {
        self.flat_by_id.get(&id)
    }

    /// Index path of a row's source node, root index first
    pub fn source_path(&self, id: NodeId) -> Option<&[usize]> {
        self.source_paths.get(&id).map(Vec::as_slice)
    }

    /// Resolve a row back to its nested node in `roots`.
    ///
    /// `None` if the forest changed shape since the last pass.
    pub fn source_node<'a>(&self, flat: &FlatViewNode, roots: &'a [TreeNode]) -> Option<&'a TreeNode> {
        let (first, rest) = self.source_path(flat.id)?.split_first()?;
        let mut node = roots.get(*first)?;
        for index in rest {
            node = node.children.as_deref()?.get(*index)?;
        }
        (node.id == flat.id).then_some(node)
    }
}

fn position_of(flat: &[Arc<FlatViewNode>], node: &FlatViewNode) -> Option<usize> {
    flat.iter().position(|n| n.id == node.id)
}

/// Nearest preceding row with a smaller depth. `None` for roots.
///
/// Only meaningful on a pre-order sequence, which is what the flattener
/// produces (both the full and the visible lists).
pub fn parent_of<'a>(flat: &'a [Arc<FlatViewNode>], node: &FlatViewNode) -> Option<&'a Arc<FlatViewNode>> {
    if node.depth == 0 {
        return None;
    }
    let start = position_of(flat, node)?;
    flat[..start].iter().rev().find(|n| n.depth < node.depth)
}

/// The contiguous run of rows nested under `node`
pub fn descendants_of<'a>(flat: &'a [Arc<FlatViewNode>], node: &FlatViewNode) -> &'a [Arc<FlatViewNode>] {
    let Some(start) = position_of(flat, node) else {
        return &[];
    };
    let tail = &flat[start + 1..];
    let len = tail
        .iter()
        .position(|n| n.depth <= node.depth)
        .unwrap_or(tail.len());
    &tail[..len]
}
