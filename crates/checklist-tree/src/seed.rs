//! Seed Data
//!
//! Builds the initial forest from a JSON object. Keys become nodes; object
//! and array values become folders, anything else a file leaf.

use serde_json::Value;

use crate::error::{TreeError, TreeResult};
use crate::node::{IdGenerator, NodeKind, TreeNode};

/// Checklist shown when the config carries no seed of its own
pub const DEFAULT_SEED: &str = r#"{
    "Groceries": {
        "Almond Meal flour": null,
        "Organic eggs": null,
        "Protein Powder": null,
        "Fruits": {
            "Apple": null,
            "Berries": ["Blueberry", "Raspberry"],
            "Orange": null
        }
    },
    "Reminders": [
        "Cook dinner",
        "Water the plants",
        "Call the dentist"
    ]
}"#;

/// Parse and build a forest from seed text
pub fn parse_seed(text: &str, ids: &mut IdGenerator) -> TreeResult<Vec<TreeNode>> {
    let value: Value = serde_json::from_str(text)?;
    build_forest(&value, ids)
}

/// Build a forest from a JSON object, preserving key order
pub fn build_forest(value: &Value, ids: &mut IdGenerator) -> TreeResult<Vec<TreeNode>> {
    match value {
        Value::Object(map) => Ok(map.iter().map(|(key, v)| build_node(key, v, ids)).collect()),
        other => Err(TreeError::InvalidSeed(format!(
            "top level must be an object, got {}",
            json_type(other)
        ))),
    }
}

fn build_node(label: &str, value: &Value, ids: &mut IdGenerator) -> TreeNode {
    let id = ids.next_id();
    match value {
        Value::Object(map) => {
            let children = map.iter().map(|(key, v)| build_node(key, v, ids)).collect();
            TreeNode::container(id, label, NodeKind::Folder).with_children(children)
        }
        Value::Array(items) => {
            let children = items.iter().map(|item| build_element(item, ids)).collect();
            TreeNode::container(id, label, NodeKind::Folder).with_children(children)
        }
        _ => TreeNode::leaf(id, label, NodeKind::File),
    }
}

/// Array elements have no key: strings and scalars become leaves labeled
/// with their text, nested objects are spliced in as unlabeled folders.
fn build_element(value: &Value, ids: &mut IdGenerator) -> TreeNode {
    match value {
        Value::String(s) => TreeNode::leaf(ids.next_id(), s.as_str(), NodeKind::File),
        Value::Object(_) | Value::Array(_) => build_node("", value, ids),
        Value::Null => TreeNode::leaf(ids.next_id(), "", NodeKind::File),
        other => TreeNode::leaf(ids.next_id(), other.to_string(), NodeKind::File),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    fn labels(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn test_default_seed_shape() {
        let mut ids = IdGenerator::new();
        let forest = parse_seed(DEFAULT_SEED, &mut ids).unwrap();

        assert_eq!(labels(&forest), vec!["Groceries", "Reminders"]);
        let groceries = forest[0].children.as_ref().unwrap();
        assert_eq!(
            labels(groceries),
            vec!["Almond Meal flour", "Organic eggs", "Protein Powder", "Fruits"]
        );
        assert!(groceries[0].is_leaf());
        assert_eq!(groceries[0].kind, NodeKind::File);

        let berries = groceries[3].find(NodeId(7)).unwrap();
        assert_eq!(berries.label, "Berries");
        assert_eq!(labels(berries.children.as_ref().unwrap()), vec!["Blueberry", "Raspberry"]);

        let reminders = forest[1].children.as_ref().unwrap();
        assert_eq!(reminders.len(), 3);
        assert!(reminders.iter().all(TreeNode::is_leaf));
    }

    #[test]
    fn test_ids_unique_preorder() {
        let mut ids = IdGenerator::new();
        let forest = parse_seed(DEFAULT_SEED, &mut ids).unwrap();
        let total: usize = forest.iter().map(TreeNode::count).sum();
        assert_eq!(total, 14);
        assert_eq!(forest[0].id, NodeId(1));
        assert_eq!(ids.next_id(), NodeId(15));
    }

    #[test]
    fn test_empty_array_is_empty_folder() {
        let mut ids = IdGenerator::new();
        let forest = parse_seed(r#"{"Inbox": []}"#, &mut ids).unwrap();
        assert_eq!(forest[0].kind, NodeKind::Folder);
        assert_eq!(forest[0].children, Some(vec![]));
    }

    #[test]
    fn test_scalars_become_leaves() {
        let mut ids = IdGenerator::new();
        let forest = parse_seed(r#"{"List": [1, true, null]}"#, &mut ids).unwrap();
        assert_eq!(labels(forest[0].children.as_ref().unwrap()), vec!["1", "true", ""]);
    }

    #[test]
    fn test_rejects_non_object() {
        let mut ids = IdGenerator::new();
        let err = parse_seed(r#"["a", "b"]"#, &mut ids).unwrap_err();
        assert_eq!(err, TreeError::InvalidSeed("top level must be an object, got array".into()));
        assert!(matches!(parse_seed("{oops", &mut ids), Err(TreeError::Parse(_))));
    }
}
