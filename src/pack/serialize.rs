//! YAML rendering of packed documents

use crate::error::{Error, Result};
use crate::node::Node;

/// Render `node` as block-style YAML, keeping mapping keys in the order they
/// were inserted.
pub fn to_yaml(node: &Node) -> Result<String> {
    serde_yaml::to_string(node).map_err(|e| Error::Serialization {
        message: format!("Failed to render packed document: {}", e),
    })
}
