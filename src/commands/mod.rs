//! # CLI Command Implementations
//!
//! Each subcommand of the `config-pack` tool lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `config_pack` library.

use clap::Args;
use std::path::PathBuf;

use config_pack::PackOptions;

pub mod completions;
pub mod pack;
pub mod tree;
pub mod validate;

// Arguments shared by every command that reads a configuration tree.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to the configuration directory (for example `.circleci`).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// File name treated as the primary document at each level.
    ///
    /// May be repeated. Defaults to `config.yml` and `config.yaml`.
    #[arg(long = "primary", value_name = "NAME")]
    pub primary_documents: Vec<String>,
}

impl SourceArgs {
    pub fn options(&self) -> PackOptions {
        if self.primary_documents.is_empty() {
            PackOptions::default()
        } else {
            PackOptions::default().with_primary_documents(self.primary_documents.iter().cloned())
        }
    }
}
