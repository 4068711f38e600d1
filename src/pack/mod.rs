//! # Packing
//!
//! This module turns a directory hierarchy of configuration fragments into a
//! single YAML document. The layout it understands is:
//!
//! ```text
//! <root>/
//!   config.yml            # primary document, seeds the result
//!   @extra.yml            # fragment, merged into the enclosing mapping
//!   commands/<name>.yml
//!   jobs/<name>.yml
//!   executors/<name>.yml
//!   orbs/<name>/...       # local orb, packed recursively
//!   orbs/<name>.yml       # orb reference, e.g. a version pin
//!   <other>.yml           # becomes key <other>
//!   <other>/...           # becomes key <other>, packed recursively
//! ```
//!
//! ## Components
//!
//! - **`tree`**: the recursive builder that applies the layers for one
//!   directory.
//! - **`reserved`**: reads the flat `commands`, `jobs` and `executors`
//!   directories.
//! - **`orbs`**: inlines local orbs and orb references.
//! - **`validate`**: checks that documents which must be mappings are.
//! - **`serialize`**: renders the result as block-style YAML.
//!
//! Packing is a pure function of the directory contents. Entries are always
//! visited in name order, so packing an unchanged tree twice yields
//! byte-identical output.

pub mod orbs;
pub mod reserved;
pub mod serialize;
pub mod tree;
pub mod validate;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::loader;
use crate::node::Node;
use crate::options::PackOptions;
use tree::TreeBuilder;

/// Pack the tree at `root` with default options and render it as YAML.
pub fn pack<P: AsRef<Path>>(root: P) -> Result<String> {
    pack_with(root, &PackOptions::default())
}

/// Pack the tree at `root` and render it as YAML.
pub fn pack_with<P: AsRef<Path>>(root: P, options: &PackOptions) -> Result<String> {
    let node = pack_node(root, options)?;
    serialize::to_yaml(&node)
}

/// Pack the tree at `root` into an in-memory document.
///
/// `root` is normally a directory. A single file is also accepted and is
/// treated as a primary document with nothing laid over it.
pub fn pack_node<P: AsRef<Path>>(root: P, options: &PackOptions) -> Result<Node> {
    let root = std::path::absolute(root.as_ref()).map_err(|e| Error::io(root.as_ref(), e))?;
    let metadata = fs::metadata(&root).map_err(|e| Error::io(&root, e))?;

    let node = if metadata.is_dir() {
        Node::Mapping(TreeBuilder::new(options).build(&root)?)
    } else {
        let document = validate::expect_mapping(loader::load(&root)?, &root)?;
        Node::Mapping(document)
    };

    validate::ensure_mapping(&node, &root)?;
    debug!("Packed {}", root.display());
    Ok(node)
}

/// Tracks which entry claimed each key within one directory.
#[derive(Debug, Default)]
pub(crate) struct KeyClaims {
    claimed: HashMap<String, PathBuf>,
}

impl KeyClaims {
    /// Record that `path` resolves to `key`, failing if a sibling already
    /// did.
    pub(crate) fn claim(&mut self, key: &str, path: &Path) -> Result<()> {
        if let Some(first) = self.claimed.get(key) {
            return Err(Error::KeyCollision {
                key: key.to_string(),
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }
        self.claimed.insert(key.to_string(), path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn test_claims_detect_duplicates() {
        let mut claims = KeyClaims::default();
        claims.claim("build", Path::new("jobs/build.yaml")).unwrap();
        claims.claim("test", Path::new("jobs/test.yml")).unwrap();

        let err = claims.claim("build", Path::new("jobs/build.yml")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Structure);
        assert!(err.to_string().contains("jobs/build.yaml"));
        assert!(err.to_string().contains("jobs/build.yml"));
    }

    #[test]
    fn test_pack_missing_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = pack(&missing).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.path(), Some(missing.as_path()));
    }

    #[test]
    fn test_pack_single_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.yml");
        fs::write(&file, "version: 2.1\njobs: {}\n").unwrap();

        let yaml = pack(&file).unwrap();
        assert_eq!(yaml, "version: 2.1\njobs: {}\n");
    }

    #[test]
    fn test_pack_empty_directory_is_empty_mapping() {
        let temp = TempDir::new().unwrap();
        let yaml = pack(temp.path()).unwrap();
        assert_eq!(yaml, "{}\n");
    }
}
