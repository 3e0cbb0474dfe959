use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// User identity as reported by the identity provider.
///
/// Only the fields this system consumes are modeled; everything else in the
/// provider's payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Session envelope issued by the provider on a successful sign-in.
///
/// The access token is opaque to this system: it is handed on or forwarded
/// for introspection, never inspected locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: ProviderUser,
}

/// Profile metadata attached to a signup request.
///
/// The phone number appears here in addition to the top-level signup field
/// so consumers of the provider's user record can read it from either place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
