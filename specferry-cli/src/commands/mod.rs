pub mod sync;
pub mod update;

use anyhow::Result;
use colored::Colorize;

use specferry_core::ConfigError;
use specferry_sync::RunOutcome;

/// Resolve the host credential: flag first, then `GITHUB_TOKEN`.
///
/// Missing token fails here, before any git or network side effect.
pub(crate) fn resolve_token(flag: Option<String>) -> Result<String> {
    flag.or_else(|| env_nonempty("GITHUB_TOKEN"))
        .ok_or_else(|| anyhow::Error::new(ConfigError::MissingToken))
}

/// An environment variable, treating empty-but-set as unset.
pub(crate) fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

pub(crate) fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::NoChanges => {
            println!("{} no changes detected — nothing to do", "✓".green());
        }
        RunOutcome::PushSkipped => {
            println!(
                "{} remote branch already up to date — push skipped",
                "✓".green()
            );
        }
        RunOutcome::Pushed { pull: None } => {
            println!("{} changes pushed", "✓".green());
        }
        RunOutcome::Pushed { pull: Some(pull) } => {
            println!(
                "{} changes pushed — pull request #{}: {}",
                "✓".green(),
                pull.number,
                pull.url
            );
        }
    }
}
