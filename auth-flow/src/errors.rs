use thiserror::Error;

/// Error surfaced by a provider operation.
///
/// Carries only the provider's human-readable message. The flow reports it
/// to the user unmodified, so adapters must not wrap it in extra context.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct AuthProviderError(pub String);

impl AuthProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
