//! Error types for specferry-host.

use thiserror::Error;

/// All errors that can arise from remote-host API calls.
#[derive(Debug, Error)]
pub enum HostError {
    /// Repository verification failed; carries a remediation hint.
    #[error(
        "access to {repository} could not be verified (HTTP {status}); \
         ensure the token has 'repo' scope and write access"
    )]
    AccessDenied { repository: String, status: u16 },

    /// The API answered with a failure status.
    #[error("host API {operation} failed (HTTP {status}): {detail}")]
    Api {
        operation: &'static str,
        status: u16,
        detail: String,
    },

    /// The request never reached the API (DNS, TLS, connect, ...).
    #[error("transport error during {operation}: {detail}")]
    Transport {
        operation: &'static str,
        detail: String,
    },

    /// The API answered but the payload did not decode.
    #[error("unexpected response from {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}
