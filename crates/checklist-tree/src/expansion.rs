//! Expansion State
//!
//! Which folders are open. Keyed by node id so it survives re-flattening.

use std::collections::HashSet;
use std::sync::Arc;

use crate::flatten::{descendants_of, FlatViewNode};
use crate::node::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<NodeId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expand(&mut self, id: NodeId) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.expanded.remove(&id);
    }

    /// Returns the new state
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Expand every expandable row
    pub fn expand_all(&mut self, flat: &[Arc<FlatViewNode>]) {
        self.expanded
            .extend(flat.iter().filter(|n| n.expandable).map(|n| n.id));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Expand `node` and everything below it
    pub fn expand_descendants(&mut self, flat: &[Arc<FlatViewNode>], node: &FlatViewNode) {
        self.expand(node.id);
        self.expand_all(descendants_of(flat, node));
    }

    /// Forget ids that are no longer in the tree
    pub fn retain_live(&mut self, flat: &[Arc<FlatViewNode>]) {
        let live: HashSet<NodeId> = flat.iter().map(|n| n.id).collect();
        self.expanded.retain(|id| live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Predicate for [`crate::TreeFlattener::visible`]
    pub fn predicate(&self) -> impl Fn(NodeId) -> bool + '_ {
        move |id| self.is_expanded(id)
    }
}
