//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_tree_view;
mod label_editor;
mod toolbar;
mod tree_item;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_tree_view::ItemTreeView;
pub use label_editor::LabelEditor;
pub use toolbar::Toolbar;
pub use tree_item::TreeItem;
