//! Error taxonomy for one extraction run.
//!
//! Fatal variants abort the run (non-zero exit); `EndpointFetchFailed` is
//! caught per plan entry and only downgrades that entry to a warning.

use crate::fetch::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Name resolution produced no usable identifier. Fatal.
    #[error("player '{username}' not found")]
    IdentityNotFound { username: String },

    /// Every listing strategy came back empty or failed. Fatal.
    #[error("no SkyBlock profiles found for '{username}'")]
    NoProfilesFound { username: String },

    /// Upstream denied access to the full listing; triggers the
    /// active-profile fallback, never aborts the run by itself.
    #[error("API access denied: {context}")]
    PermissionDenied { context: String },

    /// One auxiliary extraction call failed. Logged and skipped.
    #[error("failed to extract {description}: {source}")]
    EndpointFetchFailed {
        description: String,
        #[source]
        source: FetchError,
    },

    /// No API key available. Fatal in unattended mode.
    #[error("an API key is required in unattended mode")]
    MissingCredential,

    /// Any other upstream call failure (listing, identity transport).
    #[error("{context}: {source}")]
    Api {
        context: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
