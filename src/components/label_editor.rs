//! Label Editor Component
//!
//! Inline text input for naming a new row or renaming an existing one.
//! Enter or blur saves, Escape cancels.

use checklist_tree::NodeId;
use leptos::prelude::*;

use crate::context::ChecklistContext;

#[component]
pub fn LabelEditor(id: NodeId, initial: String) -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext should be provided");

    let (text, set_text) = signal(initial);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            ctx.save_label(id, text.get_untracked());
        }
        "Escape" => ctx.cancel_edit(id),
        _ => {}
    };

    view! {
        <input
            class="label-editor"
            type="text"
            placeholder="Name..."
            node_ref=input_ref
            prop:value=move || text.get()
            on:input=move |ev| set_text.set(event_target_value(&ev))
            on:keydown=on_keydown
            on:blur=move |_| ctx.save_label(id, text.get_untracked())
        />
    }
}
