//! Directory tree packing
//!
//! [`TreeBuilder::build`] turns one directory into one mapping. The layers
//! are applied in a fixed order:
//!
//! 1.  The primary document (`config.yml` by default) seeds the mapping.
//! 2.  Fragment files (`@name.yml`) are laid over it, key by key.
//! 3.  `commands/`, `jobs/` and `executors/` are merged into their sections.
//! 4.  `orbs/` is merged into the `orbs` section, packing local orbs
//!     recursively.
//! 5.  Every other YAML file becomes a key holding its content, and every
//!     other directory becomes a key holding its own packed mapping.
//!
//! Within each layer entries are visited in file name order.
//!
//! Symbolic links are followed. A directory that resolves to one of the
//! directories already being packed above it is reported as
//! [`Error::CycleDetected`] instead of being descended into.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::orbs;
use super::reserved::{self, Section};
use super::validate::expect_mapping;
use super::KeyClaims;
use crate::error::{Error, Result};
use crate::loader;
use crate::merge::{overlay_mapping, overlay_section, replace_key};
use crate::node::Mapping;
use crate::options::PackOptions;
use crate::scanner::{self, yaml_stem, DirectoryEntry};

/// Name of the directory holding orb definitions.
pub const ORBS_DIR: &str = "orbs";

/// What an entry contributes to its directory's mapping.
enum Role<'e> {
    Primary,
    Fragment,
    Section(Section),
    Orbs,
    Key(&'e str),
    Skip,
}

/// Recursive packer for one directory tree
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    options: &'a PackOptions,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(options: &'a PackOptions) -> Self {
        Self { options }
    }

    /// Pack the directory at `dir` into a mapping.
    pub fn build(&self, dir: &Path) -> Result<Mapping> {
        self.build_within(dir, &mut Vec::new())
    }

    /// Pack `dir` below the canonical directories in `ancestors`.
    pub(crate) fn build_within(
        &self,
        dir: &Path,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Mapping> {
        let canonical = fs::canonicalize(dir).map_err(|e| Error::io(dir, e))?;
        if ancestors.contains(&canonical) {
            return Err(Error::CycleDetected {
                path: dir.to_path_buf(),
                ancestor: canonical,
            });
        }

        ancestors.push(canonical);
        let packed = self.build_layers(dir, ancestors);
        ancestors.pop();
        packed
    }

    fn build_layers(&self, dir: &Path, ancestors: &mut Vec<PathBuf>) -> Result<Mapping> {
        debug!("Packing directory {}", dir.display());
        let entries = scanner::scan_dir(dir)?;

        let mut claims = KeyClaims::default();
        let mut primary: Option<&DirectoryEntry> = None;
        let mut fragments = Vec::new();
        let mut sections = Vec::new();
        let mut orbs_dir = None;
        let mut ordinary = Vec::new();

        for entry in &entries {
            match self.role(entry) {
                Role::Primary => {
                    if let Some(first) = primary {
                        return Err(Error::KeyCollision {
                            key: yaml_stem(&entry.name).unwrap_or(&entry.name).to_string(),
                            first: first.path.clone(),
                            second: entry.path.clone(),
                        });
                    }
                    primary = Some(entry);
                }
                Role::Fragment => fragments.push(entry),
                Role::Section(section) => {
                    claims.claim(section.as_str(), &entry.path)?;
                    sections.push((section, entry));
                }
                Role::Orbs => {
                    claims.claim(ORBS_DIR, &entry.path)?;
                    orbs_dir = Some(entry);
                }
                Role::Key(name) => {
                    claims.claim(name, &entry.path)?;
                    ordinary.push((name, entry));
                }
                Role::Skip => trace!("Skipping non-YAML file {}", entry.path.display()),
            }
        }

        let mut packed = match primary {
            Some(entry) => expect_mapping(loader::load(&entry.path)?, &entry.path)?,
            None => Mapping::new(),
        };

        for entry in fragments {
            let fragment = expect_mapping(loader::load(&entry.path)?, &entry.path)?;
            overlay_mapping(&mut packed, fragment, &entry.path);
        }

        for (section, entry) in sections {
            let definitions = reserved::interpret(section, &entry.path)?;
            overlay_section(&mut packed, section.as_str(), definitions, &entry.path);
        }

        if let Some(entry) = orbs_dir {
            let inlined = orbs::inline(self, &entry.path, ancestors)?;
            overlay_section(&mut packed, ORBS_DIR, inlined, &entry.path);
        }

        for (name, entry) in ordinary {
            if entry.is_dir() {
                let nested = self.build_within(&entry.path, ancestors)?;
                overlay_section(&mut packed, name, nested, &entry.path);
            } else {
                replace_key(&mut packed, name, loader::load(&entry.path)?, &entry.path);
            }
        }

        Ok(packed)
    }

    fn role<'e>(&self, entry: &'e DirectoryEntry) -> Role<'e> {
        if entry.is_dir() {
            if entry.name == ORBS_DIR {
                return Role::Orbs;
            }
            return match Section::from_dir_name(&entry.name) {
                Some(section) => Role::Section(section),
                None => Role::Key(&entry.name),
            };
        }

        if self.options.is_primary_document(&entry.name) {
            return Role::Primary;
        }
        match yaml_stem(&entry.name) {
            Some(_) if entry.name.starts_with('@') => Role::Fragment,
            Some(stem) => Role::Key(stem),
            None => Role::Skip,
        }
    }
}
