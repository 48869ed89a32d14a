//! Checklist Context
//!
//! Owns the tree store and wires its publications into the reactive view
//! state. Provided to every component via the Leptos Context API.

use std::sync::Arc;

use checklist_tree::{parent_of, ChecklistConfig, FlatViewNode, NodeId, TreeFlattener, TreeNode, TreeStore};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::{AppState, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct ChecklistContext {
    /// Canonical forest; callbacks are not `Send`, so local storage
    tree: StoredValue<TreeStore, LocalStorage>,
    flattener: StoredValue<TreeFlattener>,
    pub state: AppStore,
    pub config: StoredValue<ChecklistConfig>,
}

impl ChecklistContext {
    pub fn new(mut tree: TreeStore, config: ChecklistConfig) -> Self {
        let state = Store::new(AppState::default());
        let flattener = StoredValue::new(TreeFlattener::new());

        let publish_rows = move |roots: &[TreeNode]| {
            let rows = flattener
                .try_update_value(|f| f.flatten(roots).to_vec())
                .unwrap_or_default();
            state.rows().set(rows);
        };
        publish_rows(tree.roots());
        tree.subscribe(publish_rows);

        Self {
            tree: StoredValue::new_local(tree),
            flattener,
            state,
            config: StoredValue::new(config),
        }
    }

    fn row(&self, id: NodeId) -> Option<Arc<FlatViewNode>> {
        self.flattener.with_value(|f| f.flat_node(id).cloned())
    }

    /// Rows under expanded folders only
    pub fn visible_rows(&self) -> Vec<Arc<FlatViewNode>> {
        self.state.rows().track();
        self.state
            .expansion()
            .with(|e| self.flattener.with_value(|f| f.visible(e.predicate())))
    }

    /// Node has a children sequence and can take new entries
    pub fn can_add_under(&self, id: NodeId) -> bool {
        self.tree
            .with_value(|t| t.find(id).is_some_and(|n| !n.is_leaf()))
    }

    // ========================
    // Insert / rename / delete
    // ========================

    pub fn add_root(&self) {
        self.discard_pending();
        if let Some(id) = self.tree.try_update_value(|t| t.insert_root()) {
            log::info!("New list {}", id);
            self.begin_edit(id, true);
        }
    }

    pub fn add_child(&self, parent: NodeId, folder: bool) {
        self.discard_pending();
        let inserted = self
            .tree
            .try_update_value(|t| {
                if folder {
                    t.insert_folder(parent, "")
                } else {
                    t.insert_item(parent, "")
                }
            })
            .flatten();
        match inserted {
            Some(id) => {
                web_sys::console::log_1(&format!("[TREE] Added {} under {}", id, parent).into());
                // An unchecked newcomer reopens a completed parent
                let rows = self.state.rows().get_untracked();
                self.state.selection().update(|s| s.refresh_ancestors(&rows, id));
                if self.config.with_value(|c| c.expand_new_folders) {
                    self.state.expansion().update(|e| e.expand(parent));
                }
                self.begin_edit(id, true);
            }
            None => log::debug!("Cannot add under {}", parent),
        }
    }

    pub fn start_rename(&self, id: NodeId) {
        if self.state.pending_new().get_untracked() != Some(id) {
            self.discard_pending();
        }
        self.begin_edit(id, false);
    }

    fn begin_edit(&self, id: NodeId, fresh: bool) {
        self.state.editing().set(Some(id));
        self.state.pending_new().set(fresh.then_some(id));
    }

    fn end_edit(&self) {
        self.state.editing().set(None);
        self.state.pending_new().set(None);
    }

    /// An unnamed placeholder left behind by a previous "add" is dropped
    fn discard_pending(&self) {
        let Some(id) = self.state.pending_new().get_untracked() else {
            return;
        };
        let unnamed = self.row(id).is_some_and(|row| row.label.is_empty());
        self.end_edit();
        if unnamed {
            self.delete(id);
        }
    }

    pub fn save_label(&self, id: NodeId, label: String) {
        if self.state.editing().get_untracked() != Some(id) {
            return;
        }
        let label = label.trim().to_string();
        let fresh = self.state.pending_new().get_untracked() == Some(id);
        self.end_edit();
        if label.is_empty() && fresh {
            self.delete(id);
        } else {
            self.tree.update_value(|t| {
                t.update_label(id, label);
            });
        }
    }

    pub fn cancel_edit(&self, id: NodeId) {
        if self.state.editing().get_untracked() != Some(id) {
            return;
        }
        let fresh = self.state.pending_new().get_untracked() == Some(id);
        self.end_edit();
        if fresh {
            self.delete(id);
        }
    }

    pub fn delete(&self, id: NodeId) {
        let parent = self.row(id).and_then(|row| {
            let rows = self.state.rows().get_untracked();
            parent_of(&rows, &row).map(|p| p.id)
        });

        self.tree.update_value(|t| {
            t.remove(id);
        });
        web_sys::console::log_1(&format!("[TREE] Deleted {}", id).into());

        let rows = self.state.rows().get_untracked();
        self.state.expansion().update(|e| e.retain_live(&rows));
        self.state.selection().update(|s| {
            s.retain_live(&rows);
            // Removing the last unchecked child may complete the parent.
            // Removing the only child unchecks it: an empty folder is never complete.
            if let Some(parent) = parent.and_then(|p| rows.iter().find(|r| r.id == p)) {
                s.check_root(&rows, parent);
                s.check_all_parents(&rows, parent);
            }
        });
        if self.state.editing().get_untracked() == Some(id) {
            self.end_edit();
        }
    }

    // ========================
    // Expansion
    // ========================

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.state.expansion().with(|e| e.is_expanded(id))
    }

    pub fn toggle_expanded(&self, id: NodeId) {
        self.state.expansion().update(|e| {
            let open = e.toggle(id);
            web_sys::console::log_1(&format!("[TREE] {} {}", if open { "Expanded" } else { "Collapsed" }, id).into());
        });
    }

    pub fn expand_all(&self) {
        let rows = self.state.rows().get_untracked();
        self.state.expansion().update(|e| e.expand_all(&rows));
    }

    pub fn collapse_all(&self) {
        self.state.expansion().update(|e| e.collapse_all());
    }

    // ========================
    // Checklist
    // ========================

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.state.selection().with(|s| s.is_selected(id))
    }

    /// Some but not all descendants checked
    pub fn is_partial(&self, id: NodeId) -> bool {
        let rows = self.state.rows().get();
        let Some(row) = rows.iter().find(|r| r.id == id) else {
            return false;
        };
        self.state
            .selection()
            .with(|s| s.descendants_partially_selected(&rows, row))
    }

    pub fn toggle_checked(&self, id: NodeId) {
        let rows = self.state.rows().get_untracked();
        let Some(row) = rows.iter().find(|r| r.id == id) else {
            return;
        };
        web_sys::console::log_1(&format!("[TREE] Toggled check on {}", id).into());
        self.state.selection().update(|s| {
            if row.expandable {
                s.toggle_item(&rows, row);
            } else {
                s.toggle_leaf(&rows, row);
            }
        });
    }
}
