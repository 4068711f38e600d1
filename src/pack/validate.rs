//! Mapping validation
//!
//! Primary documents, fragments and the packed root must all be mappings.
//! These checks turn any other shape into a [`Error::NotMapping`] naming the
//! source path and the kind that was found.

use std::path::Path;

use crate::error::{Error, Result};
use crate::node::{Mapping, Node, NodeKind};

/// Unwrap `node` as a mapping, or fail naming `path`.
pub fn expect_mapping(node: Node, path: &Path) -> Result<Mapping> {
    match node {
        Node::Mapping(mapping) => Ok(mapping),
        Node::Tagged(tagged) => expect_mapping(tagged.value, path),
        other => Err(Error::NotMapping {
            path: path.to_path_buf(),
            kind: NodeKind::of(&other),
        }),
    }
}

/// Check that the packed root is a mapping.
pub fn ensure_mapping(node: &Node, path: &Path) -> Result<()> {
    match NodeKind::of(node) {
        NodeKind::Mapping => Ok(()),
        kind @ (NodeKind::Scalar | NodeKind::Sequence) => Err(Error::NotMapping {
            path: path.to_path_buf(),
            kind,
        }),
    }
}
