use identity::provider::ProviderUser;
use uuid::Uuid;

/// Identity resolved from a bearer token, as attested by the provider.
///
/// Inserted into the request extensions by the token gate; handlers read
/// it from there instead of touching the token again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
}

impl From<ProviderUser> for AuthenticatedUser {
    fn from(user: ProviderUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
