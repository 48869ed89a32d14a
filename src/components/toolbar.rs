//! Toolbar Component
//!
//! Actions that are not tied to a single row.

use leptos::prelude::*;

use crate::context::ChecklistContext;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext should be provided");

    view! {
        <div class="toolbar">
            <button class="new-list-btn" on:click=move |_| ctx.add_root()>"+ New list"</button>
            <button class="toolbar-btn" on:click=move |_| ctx.expand_all()>"Expand all"</button>
            <button class="toolbar-btn" on:click=move |_| ctx.collapse_all()>"Collapse all"</button>
        </div>
    }
}
