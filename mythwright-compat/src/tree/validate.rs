//! Shape check for document trees.

use serde_json::Value;

/// Returns true iff `value` is an object with `type == "doc"` and an array
/// `content`. Child nodes are not inspected.
pub fn is_valid_document_tree(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.get("type").and_then(Value::as_str) == Some("doc")
        && object.get("content").is_some_and(Value::is_array)
}
