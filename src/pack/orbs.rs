//! Local orb inlining
//!
//! Each child of an `orbs/` directory defines one orb. A subdirectory is a
//! local orb source tree and is packed recursively with the same rules as
//! the top level. A YAML file is an orb reference (usually a version pin
//! such as `circleci/node@5.0`) and is inlined as parsed.

use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::tree::TreeBuilder;
use super::KeyClaims;
use crate::error::Result;
use crate::loader;
use crate::node::{key, Mapping, Node};
use crate::scanner::{self, yaml_stem};

/// Build the `orbs` mapping from the directory at `dir`.
///
/// `ancestors` holds the canonical directories being packed above `dir`,
/// so that a local orb linking back to one of them is caught.
pub fn inline(
    builder: &TreeBuilder<'_>,
    dir: &Path,
    ancestors: &mut Vec<PathBuf>,
) -> Result<Mapping> {
    debug!("Inlining orbs from {}", dir.display());
    let mut claims = KeyClaims::default();
    let mut orbs = Mapping::new();

    for entry in scanner::scan_dir(dir)? {
        if entry.is_dir() {
            claims.claim(&entry.name, &entry.path)?;
            let packed = builder.build_within(&entry.path, ancestors)?;
            orbs.insert(key(&entry.name), Node::Mapping(packed));
            continue;
        }

        let Some(name) = yaml_stem(&entry.name) else {
            trace!("Skipping non-YAML file {}", entry.path.display());
            continue;
        };
        claims.claim(name, &entry.path)?;
        orbs.insert(key(name), loader::load(&entry.path)?);
    }

    Ok(orbs)
}
