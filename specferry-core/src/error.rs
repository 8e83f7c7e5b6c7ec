//! Error types for specferry-core.

use thiserror::Error;

/// All errors that can arise from run configuration.
///
/// Every variant is raised before any git or network side effect.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `sources` input parsed as neither YAML nor JSON.
    #[error("failed to parse sources as YAML ({yaml}) or JSON ({json}); check the format")]
    UnparsableMappings { yaml: String, json: String },

    /// The `sources` input parsed, but the list was empty.
    #[error("source mappings must be a non-empty list")]
    EmptyMappings,

    /// A mapping entry is missing `from` or `to`.
    #[error("source mapping at index {index} is missing required '{field}' field")]
    MappingField { index: usize, field: &'static str },

    /// A repository reference was not of the form `owner/repo`.
    #[error("invalid repository '{input}': expected the form owner/repo")]
    InvalidRepoSlug { input: String },

    /// No host credential was supplied.
    #[error("a host token is required; pass --token or set GITHUB_TOKEN")]
    MissingToken,
}
