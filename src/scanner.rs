//! Directory scanning
//!
//! Lists the immediate children of a directory in a deterministic order and
//! classifies each one as a file or a directory. Hidden entries are skipped.

use std::io;
use std::path::{Path, PathBuf};

use log::trace;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::options::YAML_EXTENSIONS;

/// Whether a scanned entry is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The entry's file name.
    pub name: String,
    pub kind: EntryKind,
    /// Full path to the entry.
    pub path: PathBuf,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Whether this is a file with a `.yml` or `.yaml` extension.
    pub fn is_yaml_file(&self) -> bool {
        self.kind == EntryKind::File && yaml_stem(&self.name).is_some()
    }
}

/// List the immediate children of `dir`, sorted by name.
///
/// Symbolic links are followed, so a link to a directory is reported as a
/// directory. Entries whose name begins with `.` are skipped.
pub fn scan_dir(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for item in walker {
        let item = item.map_err(|e| walk_error(dir, e))?;
        let name = item.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            trace!("Skipping hidden entry {}", item.path().display());
            continue;
        }

        let kind = if item.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(DirectoryEntry {
            name,
            kind,
            path: item.into_path(),
        });
    }

    Ok(entries)
}

/// The file name without its `.yml`/`.yaml` extension, or `None` if the
/// name does not carry one of those extensions.
///
/// Only the final extension is removed (`my.job.yml` becomes `my.job`) and
/// matching is case-sensitive.
pub fn yaml_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || !YAML_EXTENSIONS.contains(&ext) {
        return None;
    }
    Some(stem)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn walk_error(dir: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(dir).to_path_buf();
    let source = match err.into_io_error() {
        Some(source) => source,
        None => io::Error::other("filesystem loop detected"),
    };
    Error::io(path, source)
}
