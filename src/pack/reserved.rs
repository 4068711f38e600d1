//! Reserved section directories
//!
//! `commands/`, `jobs/` and `executors/` hold one definition per file. The
//! directory is flat: each YAML file becomes one entry keyed by its stem,
//! and any subdirectory is rejected.

use std::fmt;
use std::path::Path;

use log::{debug, trace};

use super::KeyClaims;
use crate::error::{Error, Result};
use crate::loader;
use crate::node::{key, Mapping};
use crate::scanner::{self, yaml_stem};

/// A flat reserved section directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Commands,
    Jobs,
    Executors,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Commands, Section::Jobs, Section::Executors];

    /// Match a directory name against the reserved section names.
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Commands => "commands",
            Section::Jobs => "jobs",
            Section::Executors => "executors",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load every definition file in the section directory at `dir`.
///
/// Entries appear in file name order. Files without a YAML extension are
/// skipped.
pub fn interpret(section: Section, dir: &Path) -> Result<Mapping> {
    debug!("Reading {} from {}", section, dir.display());
    let mut claims = KeyClaims::default();
    let mut definitions = Mapping::new();

    for entry in scanner::scan_dir(dir)? {
        if entry.is_dir() {
            return Err(Error::NestedReserved {
                section: section.to_string(),
                path: entry.path,
            });
        }

        let Some(name) = yaml_stem(&entry.name) else {
            trace!("Skipping non-YAML file {}", entry.path.display());
            continue;
        };

        claims.claim(name, &entry.path)?;
        definitions.insert(key(name), loader::load(&entry.path)?);
    }

    Ok(definitions)
}
