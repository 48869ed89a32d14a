//! Checklist Tree Core
//!
//! Layered like the rest of the app:
//! - node: nested tree entities and id generation
//! - store: the canonical forest with mutation + subscription
//! - flatten: nested -> flat projection for linear rendering
//! - expansion / selection: per-node view state keyed by id
//! - seed / config: startup data

mod config;
mod error;
mod expansion;
mod flatten;
mod node;
mod seed;
mod selection;
mod store;

#[cfg(test)]
mod tests;

pub use config::ChecklistConfig;
pub use error::{TreeError, TreeResult};
pub use expansion::ExpansionState;
pub use flatten::{descendants_of, parent_of, FlatViewNode, TreeFlattener};
pub use node::{IdGenerator, NodeId, NodeKind, TreeNode};
pub use seed::{build_forest, parse_seed, DEFAULT_SEED};
pub use selection::ChecklistSelection;
pub use store::{Subscription, TreeStore};
