//! External spec-generator command.
//!
//! The generator is an opaque subprocess with no structured output
//! contract: the run only cares whether it exits successfully and whether
//! it mutated the tree.

use std::process::Command;

use crate::error::SyncError;

/// The generation step of a generation-sync run.
pub trait SpecGenerator {
    /// Regenerate specs in the current working tree.
    fn update(&self) -> Result<(), SyncError>;
}

/// The Fern CLI, installed on demand through npm.
#[derive(Debug, Default)]
pub struct FernCli;

impl FernCli {
    fn ensure_installed(&self) -> Result<(), SyncError> {
        if run("fern", &["--version"]).is_ok() {
            tracing::info!("fern CLI is already installed");
            return Ok(());
        }
        tracing::info!("fern CLI not found; installing");
        run("npm", &["install", "-g", "fern-api"])
    }
}

impl SpecGenerator for FernCli {
    fn update(&self) -> Result<(), SyncError> {
        self.ensure_installed()?;
        tracing::info!("running fern api update");
        run("fern", &["api", "update"])?;
        tracing::info!("fern api update completed");
        Ok(())
    }
}

fn run(program: &str, args: &[&str]) -> Result<(), SyncError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| SyncError::Generator(format!("failed to run {program}: {e}")))?;
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    Err(SyncError::Generator(format!(
        "{program} {} failed ({}): {stderr}",
        args.join(" "),
        output.status
    )))
}
