//! Tree Errors
//!
//! Mutations on the tree never fail; only the startup edges (seed data,
//! config) can reject their input.

use serde::{Deserialize, Serialize};

/// Common result type for fallible tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while loading seed data or configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeError {
    Parse(String),
    InvalidSeed(String),
    InvalidConfig(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::Parse(msg) => write!(f, "Parse error: {}", msg),
            TreeError::InvalidSeed(msg) => write!(f, "Invalid seed: {}", msg),
            TreeError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        TreeError::Parse(e.to_string())
    }
}
