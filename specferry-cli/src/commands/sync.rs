//! `specferry sync` — copy declared mappings into the target repository.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use specferry_core::{parse_mappings, MappingSyncOptions, RepoSlug};
use specferry_host::GithubClient;
use specferry_sync::run::run_mapping_sync;

use super::{env_nonempty, print_outcome, resolve_token};

/// Arguments for `specferry sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Target repository, as `owner/repo`.
    #[arg(long)]
    pub repository: String,

    /// Working branch to stage synchronized content on.
    #[arg(long)]
    pub branch: String,

    /// Inline source mappings (YAML or JSON list of from/to/exclude).
    #[arg(long, conflicts_with = "sources_file", allow_hyphen_values = true)]
    pub sources: Option<String>,

    /// File containing the source mappings.
    #[arg(long)]
    pub sources_file: Option<PathBuf>,

    /// Push directly to the working branch instead of opening a PR.
    #[arg(long)]
    pub auto_merge: bool,

    /// Leave the `Updated:` timestamp out of pull-request bodies.
    #[arg(long)]
    pub no_timestamp: bool,

    /// Host credential (falls back to $GITHUB_TOKEN).
    #[arg(long)]
    pub token: Option<String>,

    /// Source workspace root (falls back to $GITHUB_WORKSPACE, then cwd).
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Name used in the commit message (falls back to $GITHUB_REPOSITORY).
    #[arg(long)]
    pub source_name: Option<String>,

    /// Directory the target repository is cloned into.
    #[arg(long, default_value = "target-checkout")]
    pub checkout_dir: PathBuf,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let token = resolve_token(self.token)?;
        let repository: RepoSlug = self.repository.parse()?;

        let raw = match (self.sources, self.sources_file) {
            (Some(inline), None) => inline,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("failed to read sources file {}", path.display()))?,
            _ => bail!("provide exactly one of --sources or --sources-file"),
        };
        let mappings = parse_mappings(&raw)?;

        let source_root = match self.source_root.or_else(|| {
            env_nonempty("GITHUB_WORKSPACE").map(PathBuf::from)
        }) {
            Some(root) => root,
            None => std::env::current_dir().context("could not determine working directory")?,
        };
        let source_name = self
            .source_name
            .or_else(|| {
                env_nonempty("GITHUB_REPOSITORY")
                    .and_then(|slug| slug.split('/').nth(1).map(str::to_string))
            })
            .unwrap_or_else(|| "source".to_string());

        let options = MappingSyncOptions {
            repository,
            mappings,
            branch: self.branch,
            auto_merge: self.auto_merge,
            add_timestamp: !self.no_timestamp,
            source_root,
            source_name,
        };

        let host = GithubClient::new(token.as_str());
        let outcome = run_mapping_sync(&options, &token, &host, &self.checkout_dir)
            .context("failed to sync changes")?;
        print_outcome(&outcome);
        Ok(())
    }
}
