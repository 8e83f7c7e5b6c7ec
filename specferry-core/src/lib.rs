//! # specferry-core
//!
//! Domain types and run configuration for the specferry sync agent.
//!
//! Parse user-declared source mappings with [`config::parse_mappings`],
//! build a [`types::MappingSyncOptions`] or [`types::GenerationOptions`]
//! from them, and hand the result to `specferry-sync`.

pub mod config;
pub mod error;
pub mod types;

pub use config::parse_mappings;
pub use error::ConfigError;
pub use types::{GenerationOptions, MappingSyncOptions, RepoSlug, SourceMapping};
