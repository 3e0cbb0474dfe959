use thiserror::Error;

/// Error type for identity provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider refused the request. The message is the provider's own
    /// human-readable text and is surfaced to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("identity provider returned an unreadable response: {0}")]
    Decode(String),

    #[error("invalid identity provider base URL: {0}")]
    BadUrl(String),
}
