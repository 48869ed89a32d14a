//! Tree Store
//!
//! Owns the canonical forest and publishes it to subscribers after every
//! mutation. Subscribers get no diff; each publication means "rebuild".
//!
//! Malformed calls (unknown ids, inserting under a leaf, bad indices) are
//! absorbed as no-ops. The UI leans on this, e.g. clicking "add" again on a
//! placeholder that is still being edited.

use log::{debug, info};

use crate::error::TreeResult;
use crate::node::{IdGenerator, NodeId, NodeKind, TreeNode};
use crate::seed::build_forest;

type Callback = Box<dyn FnMut(&[TreeNode])>;

/// Handle returned by [`TreeStore::subscribe`]; pass it back to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Subscriber {
    handle: Subscription,
    callback: Callback,
}

/// In-memory checklist forest with synchronous change notification
pub struct TreeStore {
    roots: Vec<TreeNode>,
    ids: IdGenerator,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TreeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeStore")
            .field("roots", &self.roots)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TreeStore {
    pub fn new() -> Self {
        Self::with_roots(Vec::new())
    }

    /// Wrap an existing forest. New ids continue above the highest one present.
    pub fn with_roots(roots: Vec<TreeNode>) -> Self {
        Self {
            ids: IdGenerator::after(&roots),
            roots,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Build the forest from JSON seed data (see [`build_forest`])
    pub fn from_seed(value: &serde_json::Value) -> TreeResult<Self> {
        let mut ids = IdGenerator::new();
        let roots = build_forest(value, &mut ids)?;
        let store = Self {
            roots,
            ids,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        info!("Tree store seeded: {} roots, {} nodes", store.roots.len(), store.len());
        Ok(store)
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    fn find_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    /// Total number of nodes in the forest
    pub fn len(&self) -> usize {
        self.roots.iter().map(TreeNode::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    // ========================
    // Subscriptions
    // ========================

    /// Register a callback invoked with the current roots after each mutation
    pub fn subscribe(&mut self, callback: impl FnMut(&[TreeNode]) + 'static) -> Subscription {
        let handle = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            handle,
            callback: Box::new(callback),
        });
        handle
    }

    /// Returns false if the handle was already removed
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.handle != handle);
        self.subscribers.len() != before
    }

    fn publish(&mut self) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&self.roots);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Append an empty, unlabeled folder to the root sequence
    pub fn insert_root(&mut self) -> NodeId {
        let id = self.ids.next_id();
        self.roots.push(TreeNode::container(id, "", NodeKind::Folder));
        self.publish();
        id
    }

    /// Append a folder under `parent`. `None` if parent is missing or a leaf.
    pub fn insert_folder(&mut self, parent: NodeId, label: impl Into<String>) -> Option<NodeId> {
        self.insert_child(parent, label.into(), NodeKind::Folder)
    }

    /// Append an item under `parent`. `None` if parent is missing or a leaf.
    pub fn insert_item(&mut self, parent: NodeId, label: impl Into<String>) -> Option<NodeId> {
        self.insert_child(parent, label.into(), NodeKind::File)
    }

    fn insert_child(&mut self, parent: NodeId, label: String, kind: NodeKind) -> Option<NodeId> {
        // Reserve the id only once we know the insert will happen
        let target = self.roots.iter_mut().find_map(|root| root.find_mut(parent));
        let inserted = match target.and_then(|p| p.children.as_mut()) {
            Some(children) => {
                let id = self.ids.next_id();
                children.push(TreeNode::container(id, label, kind));
                Some(id)
            }
            None => {
                debug!("insert {} under {}: parent missing or leaf, ignored", kind.as_str(), parent);
                None
            }
        };
        self.publish();
        inserted
    }

    /// Rename in place. False if `id` is not in the tree.
    pub fn update_label(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        let updated = match self.find_mut(id) {
            Some(node) => {
                node.label = label.into();
                true
            }
            None => {
                debug!("rename {}: not found, ignored", id);
                false
            }
        };
        self.publish();
        updated
    }

    /// Remove the child `child` from `parent`'s children
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Option<TreeNode> {
        let removed = self
            .find_mut(parent)
            .and_then(|p| p.children.as_mut())
            .and_then(|children| {
                let pos = children.iter().position(|c| c.id == child)?;
                Some(children.remove(pos))
            });
        if removed.is_none() {
            debug!("remove {} from {}: no such child, ignored", child, parent);
        }
        self.publish();
        removed
    }

    /// Remove the child at `index` of `parent`'s children
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Option<TreeNode> {
        let removed = self
            .find_mut(parent)
            .and_then(|p| p.children.as_mut())
            .and_then(|children| (index < children.len()).then(|| children.remove(index)));
        if removed.is_none() {
            debug!("remove index {} under {}: out of range, ignored", index, parent);
        }
        self.publish();
        removed
    }

    /// Remove the root entry whose id matches, keeping the others in order
    pub fn remove_root(&mut self, id: NodeId) -> Option<TreeNode> {
        let removed = self
            .roots
            .iter()
            .position(|r| r.id == id)
            .map(|pos| self.roots.remove(pos));
        if removed.is_none() {
            debug!("remove root {}: not a root, ignored", id);
        }
        self.publish();
        removed
    }

    /// Remove a node wherever it sits in the forest
    pub fn remove(&mut self, id: NodeId) -> Option<TreeNode> {
        fn remove_from(nodes: &mut Vec<TreeNode>, id: NodeId) -> Option<TreeNode> {
            if let Some(pos) = nodes.iter().position(|n| n.id == id) {
                return Some(nodes.remove(pos));
            }
            nodes
                .iter_mut()
                .find_map(|n| n.children.as_mut().and_then(|c| remove_from(c, id)))
        }

        let removed = remove_from(&mut self.roots, id);
        if removed.is_none() {
            debug!("remove {}: not found, ignored", id);
        }
        self.publish();
        removed
    }

    /// Serialize the forest, e.g. for export or debugging
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string_pretty(&self.roots)?)
    }
}
