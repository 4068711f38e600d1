//! Document node model
//!
//! A packed document is a tree of YAML values. `serde_yaml::Value` already is
//! a tagged union whose `Mapping` keeps keys in insertion order, so it serves
//! directly as the node type. [`NodeKind`] collapses its variants into the
//! three shapes the packer cares about.

use std::fmt;

use serde_yaml::Value as YamlValue;

/// A parsed document fragment.
pub type Node = YamlValue;

/// An ordered mapping of keys to nodes.
pub type Mapping = serde_yaml::Mapping;

/// The structural shape of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
}

impl NodeKind {
    /// Classify a node. Tagged values are classified by what they wrap.
    pub fn of(node: &Node) -> Self {
        match node {
            YamlValue::Mapping(_) => NodeKind::Mapping,
            YamlValue::Sequence(_) => NodeKind::Sequence,
            YamlValue::Tagged(tagged) => NodeKind::of(&tagged.value),
            YamlValue::Null | YamlValue::Bool(_) | YamlValue::Number(_) | YamlValue::String(_) => {
                NodeKind::Scalar
            }
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "a scalar",
            NodeKind::Mapping => "a mapping",
            NodeKind::Sequence => "a sequence",
        };
        f.write_str(name)
    }
}

/// Build a string key for a mapping.
pub fn key(name: &str) -> Node {
    YamlValue::String(name.to_string())
}

/// Render a mapping key for logs and tree output.
pub fn key_label(key: &Node) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "~".to_string(),
        other => format!("{:?}", other),
    }
}
