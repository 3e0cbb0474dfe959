use async_trait::async_trait;
use identity::provider::SignUpMetadata;

use crate::errors::AuthProviderError;

/// Port for the remote identity provider operations the flow performs.
#[async_trait]
pub trait AuthProvider: Send + Sync + 'static {
    /// Authenticate an existing account.
    ///
    /// # Arguments
    ///
    /// * `email` - Account email address
    /// * `password` - Plaintext password
    ///
    /// # Errors
    ///
    /// * `AuthProviderError` - The provider refused the credentials or was
    ///   unreachable; the message is shown to the user verbatim
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthProviderError>;

    /// Register a new account.
    ///
    /// # Arguments
    ///
    /// * `email` - Account email address
    /// * `password` - Plaintext password, already checked locally
    /// * `phone` - Phone number for the account record
    /// * `metadata` - Profile metadata stored alongside the account
    ///
    /// # Errors
    ///
    /// * `AuthProviderError` - The provider refused the registration or was
    ///   unreachable; the message is shown to the user verbatim
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        phone: &str,
        metadata: SignUpMetadata,
    ) -> Result<(), AuthProviderError>;
}
