//! # specferry-sync
//!
//! The reconciliation engine behind the specferry agent.
//!
//! Call [`run::run_mapping_sync`] to copy declared mappings into a target
//! repository and reconcile the result into a branch and pull request, or
//! [`run::run_generation`] to push the output of the external spec
//! generator the same way. Both are idempotent: a run that produces no
//! tree change (or no diff against the remote branch) terminates without
//! committing, pushing, or touching any pull request.

pub mod branch;
pub mod copier;
pub mod error;
pub mod generator;
pub mod pulls;
pub mod run;

#[cfg(test)]
pub(crate) mod testing;

pub use error::SyncError;
pub use generator::{FernCli, SpecGenerator};
pub use pulls::PullKind;
pub use run::{run_generation, run_mapping_sync, RunOutcome};
