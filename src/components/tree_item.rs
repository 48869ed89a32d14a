//! Tree Item Component
//!
//! One checklist row: expand toggle, checkbox, label and row actions.

use std::sync::Arc;

use checklist_tree::{FlatViewNode, NodeKind};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, LabelEditor};
use crate::context::ChecklistContext;
use crate::state::AppStateStoreFields;

/// A single row in the tree
#[component]
pub fn TreeItem(row: Arc<FlatViewNode>) -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext should be provided");

    let id = row.id;
    let expandable = row.expandable;
    let indent = row.depth as u32 * ctx.config.with_value(|c| c.indent_px);
    let can_add = ctx.can_add_under(id);
    let is_folder = row.kind == NodeKind::Folder;
    let text = row.label.clone();

    let label_view = move || {
        if ctx.state.editing().get() == Some(id) {
            view! { <LabelEditor id=id initial=text.clone() /> }.into_any()
        } else {
            let shown = if text.is_empty() { "(untitled)".to_string() } else { text.clone() };
            view! {
                <span
                    class="item-text"
                    title="Double-click to rename"
                    on:dblclick=move |_| ctx.start_rename(id)
                >
                    {shown}
                </span>
            }
            .into_any()
        }
    };

    view! {
        <div
            class=move || if ctx.is_checked(id) { "item-row completed" } else { "item-row" }
            style=format!("margin-left: {}px;", indent)
        >
            // Collapse toggle
            {if expandable {
                view! {
                    <button class="collapse-btn" on:click=move |_| ctx.toggle_expanded(id)>
                        {move || if ctx.is_expanded(id) { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <input
                type="checkbox"
                prop:checked=move || ctx.is_checked(id)
                prop:indeterminate=move || ctx.is_partial(id)
                on:change=move |_| ctx.toggle_checked(id)
            />

            {label_view}

            {can_add.then(|| view! {
                <button class="add-child-btn" title="Add item" on:click=move |_| ctx.add_child(id, false)>"+"</button>
            })}
            {(can_add && is_folder).then(|| view! {
                <button class="add-child-btn" title="Add folder" on:click=move |_| ctx.add_child(id, true)>"⊞"</button>
            })}

            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_| ctx.delete(id)
            />
        </div>
    }
}
