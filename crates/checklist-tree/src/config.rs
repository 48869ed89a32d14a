//! Checklist Configuration
//!
//! Loaded from a JSON document. Every field is optional.

use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::node::IdGenerator;
use crate::seed::{parse_seed, DEFAULT_SEED};
use crate::store::TreeStore;

const DEFAULT_INDENT_PX: u32 = 24;
const MAX_INDENT_PX: u32 = 128;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Heading shown above the tree
    pub title: String,
    /// Horizontal indent per nesting level
    pub indent_px: u32,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    /// Open a folder right after inserting into it
    pub expand_new_folders: bool,
    /// Initial checklist; `None` uses [`DEFAULT_SEED`]
    pub seed: Option<serde_json::Value>,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            title: "Checklist".to_string(),
            indent_px: DEFAULT_INDENT_PX,
            log_level: "info".to_string(),
            expand_new_folders: true,
            seed: None,
        }
    }
}

impl ChecklistConfig {
    pub fn from_json(text: &str) -> TreeResult<Self> {
        let mut config: Self =
            serde_json::from_str(text).map_err(|e| TreeError::InvalidConfig(e.to_string()))?;
        if config.indent_px > MAX_INDENT_PX {
            warn!(
                "indent_px {} exceeds {}, using {}",
                config.indent_px, MAX_INDENT_PX, DEFAULT_INDENT_PX
            );
            config.indent_px = DEFAULT_INDENT_PX;
        }
        Ok(config)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// Store populated with the configured (or default) seed
    pub fn build_store(&self) -> TreeResult<TreeStore> {
        match &self.seed {
            Some(seed) => TreeStore::from_seed(seed),
            None => Ok(TreeStore::with_roots(parse_seed(DEFAULT_SEED, &mut IdGenerator::new())?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ChecklistConfig::from_json("{}").unwrap();
        assert_eq!(config, ChecklistConfig::default());
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = ChecklistConfig::from_json(r#"{"title": "Trip", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.title, "Trip");
        assert_eq!(config.indent_px, 24);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_indent_out_of_range_falls_back() {
        let config = ChecklistConfig::from_json(r#"{"indent_px": 4000}"#).unwrap();
        assert_eq!(config.indent_px, 24);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = ChecklistConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            ChecklistConfig::from_json(r#"{"indent_px": "wide"}"#),
            Err(TreeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_build_store_from_seed() {
        let config = ChecklistConfig::from_json(r#"{"seed": {"Packing": ["Passport", "Charger"]}}"#).unwrap();
        let store = config.build_store().unwrap();
        assert_eq!(store.roots().len(), 1);
        assert_eq!(store.len(), 3);

        let default_store = ChecklistConfig::default().build_store().unwrap();
        assert_eq!(default_store.roots().len(), 2);

        let bad = ChecklistConfig::from_json(r#"{"seed": [1, 2]}"#).unwrap();
        assert!(matches!(bad.build_store(), Err(TreeError::InvalidSeed(_))));
    }
}
