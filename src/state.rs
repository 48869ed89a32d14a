//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The tree itself
//! lives in `TreeStore`; this only holds what the view derives from it.

use std::sync::Arc;

use checklist_tree::{ChecklistSelection, ExpansionState, FlatViewNode, NodeId};
use reactive_stores::Store;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full pre-order flattening, replaced on every tree publication
    pub rows: Vec<Arc<FlatViewNode>>,
    pub expansion: ExpansionState,
    pub selection: ChecklistSelection,
    /// Row whose label editor is open
    pub editing: Option<NodeId>,
    /// Placeholder created by an "add" click and not yet named
    pub pending_new: Option<NodeId>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
