use async_trait::async_trait;

use crate::domain::access::errors::IntrospectionError;
use crate::domain::access::models::AuthenticatedUser;

/// Port for resolving bearer tokens into authenticated users.
#[async_trait]
pub trait TokenIntrospector: Send + Sync + 'static {
    /// Ask the identity provider who a token belongs to.
    ///
    /// # Arguments
    /// * `token` - Opaque bearer token exactly as presented by the caller
    ///
    /// # Returns
    /// The user the provider attests the token belongs to
    ///
    /// # Errors
    /// * `Rejected` - Provider did not recognize the token
    /// * `Transport` - Provider could not be consulted
    async fn introspect(&self, token: &str) -> Result<AuthenticatedUser, IntrospectionError>;
}
