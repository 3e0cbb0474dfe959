use async_trait::async_trait;
use identity::provider::IdentityClient;
use identity::provider::ProviderError;

use crate::domain::access::errors::IntrospectionError;
use crate::domain::access::models::AuthenticatedUser;
use crate::domain::access::ports::TokenIntrospector;

/// Token introspection backed by the remote identity provider.
#[derive(Debug, Clone)]
pub struct ProviderIntrospector {
    client: IdentityClient,
}

impl ProviderIntrospector {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenIntrospector for ProviderIntrospector {
    async fn introspect(&self, token: &str) -> Result<AuthenticatedUser, IntrospectionError> {
        let user = self.client.introspect(token).await.map_err(|e| match e {
            ProviderError::Rejected(message) => IntrospectionError::Rejected(message),
            other => IntrospectionError::Transport(other.to_string()),
        })?;

        Ok(AuthenticatedUser::from(user))
    }
}
