//! # Error Handling
//!
//! This module defines the error type returned by every packing operation.
//! It uses the `thiserror` library to build a single `Error` enum whose
//! variants carry the path (and, where relevant, the key) needed to locate
//! the offending file in the source tree.
//!
//! ## Categories
//!
//! Packing failures fall into a small taxonomy, exposed through
//! [`Error::category`]:
//!
//! - **Io**: a path is missing, unreadable, or permission was denied.
//! - **Parse**: a file's content is not well-formed YAML.
//! - **Structure**: the tree breaks a layout rule, such as two entries
//!   resolving to the same key, a subdirectory inside `commands`/`jobs`/
//!   `executors`, a directory that links back to one of its own ancestors,
//!   or a document that must be a mapping but is not.
//! - **Encoding**: the packed document could not be rendered.
//!
//! Every error is fatal to the pack that raised it. Nothing is retried and
//! no partial document is ever produced.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::node::NodeKind;

/// Main error type for packing operations
#[derive(Error, Debug)]
pub enum Error {
    /// A filesystem entry could not be read.
    #[error("I/O error for \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's content is not valid YAML.
    #[error("YAML parsing error in \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two sibling entries resolve to the same key.
    #[error(
        "Structure error: key '{key}' is defined by both \"{}\" and \"{}\"",
        first.display(),
        second.display()
    )]
    KeyCollision {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A subdirectory was found inside `commands`, `jobs` or `executors`.
    #[error(
        "Structure error: nested directory \"{}\" is not supported inside '{section}' (only files are allowed)",
        path.display()
    )]
    NestedReserved { section: String, path: PathBuf },

    /// A document that must be a mapping has some other shape.
    #[error(
        "Structure error: expected a mapping, got {kind} which is not supported for \"{}\"",
        path.display()
    )]
    NotMapping { path: PathBuf, kind: NodeKind },

    /// A directory resolves to one of the directories being packed above it.
    #[error(
        "Structure error: directory \"{}\" loops back to its ancestor \"{}\"",
        path.display(),
        ancestor.display()
    )]
    CycleDetected { path: PathBuf, ancestor: PathBuf },

    /// The packed document could not be rendered as YAML.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Structure,
    Encoding,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Io => "IOError",
            ErrorCategory::Parse => "ParseError",
            ErrorCategory::Structure => "StructureError",
            ErrorCategory::Encoding => "EncodingError",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Build an [`Error::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The taxonomy bucket this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Io { .. } => ErrorCategory::Io,
            Error::Parse { .. } => ErrorCategory::Parse,
            Error::KeyCollision { .. }
            | Error::NestedReserved { .. }
            | Error::NotMapping { .. }
            | Error::CycleDetected { .. } => ErrorCategory::Structure,
            Error::Serialization { .. } => ErrorCategory::Encoding,
        }
    }

    /// The primary source path involved, when there is one.
    ///
    /// For collisions this is the entry that was encountered second.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Io { path, .. }
            | Error::Parse { path, .. }
            | Error::NestedReserved { path, .. }
            | Error::NotMapping { path, .. }
            | Error::CycleDetected { path, .. } => Some(path),
            Error::KeyCollision { second, .. } => Some(second),
            Error::Serialization { .. } => None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
