//! Checklist Frontend App
//!
//! Main application component: title, toolbar, tree and a status line.

use checklist_tree::{ChecklistConfig, TreeStore};
use leptos::prelude::*;

use crate::components::{ItemTreeView, Toolbar};
use crate::context::ChecklistContext;
use crate::state::AppStateStoreFields;

#[component]
pub fn App(config: ChecklistConfig) -> impl IntoView {
    let tree = config.build_store().unwrap_or_else(|e| {
        log::error!("Seed rejected ({}), starting empty", e);
        TreeStore::new()
    });
    let title = config.title.clone();

    // Provide context to all children
    let ctx = ChecklistContext::new(tree, config);
    provide_context(ctx);

    web_sys::console::log_1(
        &format!("[APP] Loaded {} rows", ctx.state.rows().with_untracked(Vec::len)).into(),
    );

    view! {
        <main class="main-content">
            <h1>{title}</h1>

            <Toolbar />

            <ItemTreeView />

            <p class="item-count">
                {move || {
                    let total = ctx.state.rows().with(Vec::len);
                    let checked = ctx.state.selection().with(|s| s.len());
                    format!("{} items, {} checked", total, checked)
                }}
            </p>
        </main>
    }
}
