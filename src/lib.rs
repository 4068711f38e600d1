//! # Config Pack Library
//!
//! This library assembles a single, self-contained CircleCI configuration
//! document from a directory hierarchy that splits the configuration into
//! many files. It is designed to be used by the `config-pack` command-line
//! tool but can also be embedded in other applications.
//!
//! ## Quick Example
//!
//! ```
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("config.yml"), "version: 2.1\n").unwrap();
//! fs::create_dir(dir.path().join("jobs")).unwrap();
//! fs::write(dir.path().join("jobs/build.yml"), "steps: [checkout]\n").unwrap();
//!
//! let packed = config_pack::pack(dir.path()).unwrap();
//! assert!(packed.starts_with("version: 2.1\njobs:\n  build:\n"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Nodes (`node`)**: the in-memory document model, a YAML value tree
//!   whose mappings keep insertion order.
//! - **Scanning and loading (`scanner`, `loader`)**: deterministic directory
//!   listing and single-file parsing.
//! - **Merging (`merge`)**: the layering rules that let files on disk
//!   override inline definitions from a primary document.
//! - **Packing (`pack`)**: the recursive builder for directory trees,
//!   reserved `commands`/`jobs`/`executors` directories and local `orbs`.
//!
//! Every failure is reported through [`error::Error`], which carries the
//! offending path and is classified as an I/O, parse, structure or encoding
//! error. No partial output is produced on failure.

pub mod error;
pub mod loader;
pub mod merge;
pub mod node;
pub mod options;
pub mod output;
pub mod pack;
pub mod scanner;
pub mod summary;

pub use error::{Error, ErrorCategory, Result};
pub use options::PackOptions;
pub use pack::{pack, pack_node, pack_with};

#[cfg(test)]
mod key_proptest;
