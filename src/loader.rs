//! Leaf file loading
//!
//! Reads a single YAML file into a [`Node`]. The file is read fully into
//! memory and its handle closed before parsing begins.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::node::{Mapping, Node};

/// Load and parse the YAML file at `path`.
///
/// A file that is empty, holds only comments, or holds an explicit null
/// parses to an empty mapping.
pub fn load(path: &Path) -> Result<Node> {
    debug!("Loading {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Parse YAML `content` that was read from `path`.
pub fn parse(content: &str, path: &Path) -> Result<Node> {
    let node: Node = serde_yaml::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match node {
        Node::Null => Node::Mapping(Mapping::new()),
        other => other,
    })
}
