//! `specferry update` — run the spec generator and push its output.

use anyhow::{Context, Result};
use clap::Args;

use specferry_core::{GenerationOptions, RepoSlug};
use specferry_git::GitCli;
use specferry_host::GithubClient;
use specferry_sync::run::run_generation;
use specferry_sync::FernCli;

use super::{env_nonempty, print_outcome, resolve_token};

/// Arguments for `specferry update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Brand-new branch to create for the generated changes.
    #[arg(long)]
    pub branch: String,

    /// Push directly to the branch instead of opening a PR.
    #[arg(long)]
    pub auto_merge: bool,

    /// Leave the `Updated:` timestamp out of pull-request bodies.
    #[arg(long)]
    pub no_timestamp: bool,

    /// Host credential (falls back to $GITHUB_TOKEN).
    #[arg(long)]
    pub token: Option<String>,

    /// Repository the run operates in (falls back to $GITHUB_REPOSITORY).
    #[arg(long)]
    pub repository: Option<String>,

    /// Pull-request base ref (falls back to $GITHUB_REF, then `main`).
    #[arg(long)]
    pub base: Option<String>,
}

impl UpdateArgs {
    pub fn run(self) -> Result<()> {
        let token = resolve_token(self.token)?;

        let repository: RepoSlug = self
            .repository
            .or_else(|| env_nonempty("GITHUB_REPOSITORY"))
            .context("provide --repository or set GITHUB_REPOSITORY")?
            .parse()?;
        let base = self
            .base
            .or_else(|| {
                env_nonempty("GITHUB_REF")
                    .map(|r| r.trim_start_matches("refs/heads/").to_string())
            })
            .unwrap_or_else(|| "main".to_string());

        let options = GenerationOptions {
            repository,
            branch: self.branch,
            base,
            auto_merge: self.auto_merge,
            add_timestamp: !self.no_timestamp,
        };

        let cwd = std::env::current_dir().context("could not determine working directory")?;
        let git = GitCli::open(cwd);
        let host = GithubClient::new(token);
        let outcome = run_generation(&git, &host, &FernCli, &options)
            .context("failed to update from source")?;
        print_outcome(&outcome);
        Ok(())
    }
}
