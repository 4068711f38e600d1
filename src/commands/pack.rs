//! # Pack Command Implementation
//!
//! This module implements the `pack` subcommand, which assembles a split
//! configuration directory into a single YAML document.
//!
//! The document is written to stdout, or to the file given with `--output`.
//! On any error nothing is written and the error is reported on stderr.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::SourceArgs;

/// Pack a configuration directory into a single YAML document
#[derive(Args, Debug)]
pub struct PackArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the packed document to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the `pack` command.
pub fn execute(args: PackArgs) -> Result<()> {
    let path = &args.source.path;
    let document = config_pack::pack_with(path, &args.source.options())
        .with_context(|| format!("Failed to pack {}", path.display()))?;

    match &args.output {
        Some(output) => fs::write(output, &document)
            .with_context(|| format!("Failed to write {}", output.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
