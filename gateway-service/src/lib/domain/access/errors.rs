use thiserror::Error;

/// Failure while resolving a bearer token with the identity provider.
///
/// Both variants collapse to the same client-facing 401; the distinction
/// exists for the server-side logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntrospectionError {
    /// The provider saw the token and refused it.
    #[error("token rejected: {0}")]
    Rejected(String),

    /// The provider could not be consulted.
    #[error("introspection transport failure: {0}")]
    Transport(String),
}
