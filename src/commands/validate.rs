//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which packs a
//! configuration directory locally and reports whether it is well formed.
//!
//! ## Functionality
//!
//! - **Structure Validation**: Runs the full pack, so every YAML file is
//!   parsed and every layout rule is checked.
//! - **Summary**: Reports how many commands, jobs, executors and orbs the
//!   packed document defines, counting local orbs recursively.
//!
//! This command is read-only and makes no network calls.

use anyhow::Result;
use clap::Args;

use config_pack::output::{OutputConfig, Status};
use config_pack::summary::PackSummary;

use super::SourceArgs;

/// Check that a configuration directory packs cleanly
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let path = &args.source.path;
    println!(
        "{}",
        out.line(Status::Scan, &format!("Validating configuration: {}", path.display()))
    );

    let node = match config_pack::pack_node(path, &args.source.options()) {
        Ok(node) => node,
        Err(e) => {
            println!("{}", out.line(Status::Error, &format!("{}: {}", e.category(), e)));
            return Err(anyhow::anyhow!("Configuration at {} is invalid", path.display()));
        }
    };

    let summary = PackSummary::of(&node);
    println!(
        "{}",
        out.line(Status::Ok, &format!("Configuration at {} packs cleanly", path.display()))
    );
    println!("\n{}", out.line(Status::Info, "Configuration Summary:"));
    println!("   Commands: {}", summary.commands);
    println!("   Jobs: {}", summary.jobs);
    println!("   Executors: {}", summary.executors);
    println!("   Local orbs: {}", summary.local_orbs);
    println!("   Orb references: {}", summary.orb_references);

    Ok(())
}
