//! Checklist Selection
//!
//! Checked state of the checklist. A folder counts as checked exactly when
//! all of its descendants are; a folder with only some checked descendants
//! is shown as indeterminate.
//!
//! All tree-shaped queries take the full pre-order flat list (not the
//! visible one), so collapsed rows still count.

use std::collections::HashSet;
use std::sync::Arc;

use crate::flatten::{descendants_of, parent_of, FlatViewNode};
use crate::node::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistSelection {
    selected: HashSet<NodeId>,
}

impl ChecklistSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn select(&mut self, id: NodeId) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: NodeId) {
        self.selected.remove(&id);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn toggle(&mut self, id: NodeId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Node has descendants and every one of them is checked
    pub fn descendants_all_selected(&self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) -> bool {
        let descendants = descendants_of(flat, node);
        !descendants.is_empty() && descendants.iter().all(|d| self.is_selected(d.id))
    }

    /// Some, but not all, descendants are checked
    pub fn descendants_partially_selected(&self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) -> bool {
        let descendants = descendants_of(flat, node);
        let any = descendants.iter().any(|d| self.is_selected(d.id));
        any && !self.descendants_all_selected(flat, node)
    }

    /// Toggle a folder: its whole subtree follows the new state
    pub fn toggle_item(&mut self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) {
        let checked = self.toggle(node.id);
        for descendant in descendants_of(flat, node) {
            if checked {
                self.select(descendant.id);
            } else {
                self.deselect(descendant.id);
            }
        }
        self.check_all_parents(flat, node);
    }

    /// Toggle a single leaf
    pub fn toggle_leaf(&mut self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) {
        self.toggle(node.id);
        self.check_all_parents(flat, node);
    }

    /// Re-derive the checked state of every ancestor of `node`
    pub fn check_all_parents(&mut self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) {
        let mut parent = parent_of(flat, node);
        while let Some(p) = parent {
            self.check_root(flat, p);
            parent = parent_of(flat, p);
        }
    }

    /// Re-derive the ancestors of the row with `id` after it was inserted or
    /// moved. Unknown ids are ignored.
    pub fn refresh_ancestors(&mut self, flat: &[Arc<FlatViewNode>], id: NodeId) {
        if let Some(node) = flat.iter().find(|n| n.id == id) {
            self.check_all_parents(flat, node);
        }
    }

    /// A folder is checked iff all its descendants are
    pub fn check_root(&mut self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) {
        let all = self.descendants_all_selected(flat, node);
        let checked = self.is_selected(node.id);
        if checked && !all {
            self.deselect(node.id);
        } else if !checked && all {
            self.select(node.id);
        }
    }

    /// Forget ids that are no longer in the tree
    pub fn retain_live(&mut self, flat: &[Arc<FlatViewNode>]) {
        let live: HashSet<NodeId> = flat.iter().map(|n| n.id).collect();
        self.selected.retain(|id| live.contains(id));
    }
}
