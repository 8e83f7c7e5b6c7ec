//! specferry — repository-synchronization agent CLI.
//!
//! # Usage
//!
//! ```text
//! specferry sync --repository <owner/repo> --branch <name>
//!           (--sources <yaml|json> | --sources-file <path>)
//!           [--auto-merge] [--no-timestamp] [--token <token>]
//!           [--source-root <path>] [--checkout-dir <path>]
//! specferry update --branch <name> [--auto-merge] [--no-timestamp]
//!           [--token <token>] [--repository <owner/repo>] [--base <ref>]
//! ```
//!
//! `sync` copies declared source mappings into the target repository;
//! `update` runs `fern api update` in the current checkout. Both reconcile
//! the result into a branch and, unless auto-merge is enabled, a pull
//! request. Exit code is zero on success or intentional no-op, non-zero
//! with a message on any failure.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{sync::SyncArgs, update::UpdateArgs};

#[derive(Parser, Debug)]
#[command(
    name = "specferry",
    version,
    about = "Sync API specifications into a target repository",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy declared source mappings into the target repository.
    Sync(SyncArgs),

    /// Run the spec generator in the current checkout and push its output.
    Update(UpdateArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Update(args) => args.run(),
    }
}
