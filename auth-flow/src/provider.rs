use async_trait::async_trait;
use identity::provider::IdentityClient;
use identity::provider::SignUpMetadata;

use crate::errors::AuthProviderError;
use crate::ports::AuthProvider;

/// [`AuthProvider`] adapter backed by the shared [`IdentityClient`].
///
/// Success payloads are dropped at this boundary; the flow only consumes
/// success or failure, and failures keep the provider's message text.
#[derive(Clone)]
pub struct ProviderAuth {
    client: IdentityClient,
}

impl ProviderAuth {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthProvider for ProviderAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthProviderError> {
        self.client
            .sign_in_with_password(email, password)
            .await
            .map(|_session| ())
            .map_err(|error| AuthProviderError::new(error.to_string()))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        phone: &str,
        metadata: SignUpMetadata,
    ) -> Result<(), AuthProviderError> {
        self.client
            .sign_up(email, password, phone, &metadata)
            .await
            .map(|_user| ())
            .map_err(|error| AuthProviderError::new(error.to_string()))
    }
}
