//! Item Tree View Component
//!
//! Renders the visible rows of the checklist, one `TreeItem` per row.

use std::sync::Arc;

use checklist_tree::FlatViewNode;
use leptos::prelude::*;

use crate::components::TreeItem;
use crate::context::ChecklistContext;

/// Checklist rows under expanded folders
#[component]
pub fn ItemTreeView() -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext should be provided");

    let rows = Memo::new(move |_| ctx.visible_rows());

    view! {
        <div class="tree-view">
            <For
                each=move || rows.get()
                // A new pointer means the flattener rebuilt the row, so only
                // changed rows are re-rendered
                key={|row: &Arc<FlatViewNode>| (row.id, Arc::as_ptr(row) as usize)}
                children=move |row| view! { <TreeItem row=row /> }
            />
            <Show when=move || rows.with(Vec::is_empty)>
                <p class="empty-hint">"Nothing here yet. Start a new list."</p>
            </Show>
        </div>
    }
}
