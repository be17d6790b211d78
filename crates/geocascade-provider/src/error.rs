//! Error types for the geocascade-provider crate.

/// Errors that can occur during a single geocoding attempt.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The provider needs an API key that is not configured.
    #[error("{var} not set")]
    CredentialMissing { var: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the provider's shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Provider answered but returned no candidate location
    #[error("no results")]
    NoResults,

    /// Provider reported a non-success status in the body
    #[error("no results (status: {status})")]
    VendorStatus { status: String },
}
