//! # Config Pack CLI
//!
//! This is the binary entry point for the `config-pack` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and dispatching to the selected command.
//! - Handling top-level errors, which `anyhow` prints to stderr before the
//!   process exits with a non-zero status.
//!
//! The packing logic lives in the `config_pack` library crate; the binary is
//! a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
