use axum::Extension;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::access::models::AuthenticatedUser;

/// Handler for the gated resource. The token gate has already resolved
/// the caller; it arrives here as a request extension.
pub async fn protected(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<ProtectedResponseData> {
    Json(ProtectedResponseData::from(&user))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResponseData {
    pub message: String,
    pub user: AuthenticatedUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUserData {
    pub id: Uuid,
    pub email: Option<String>,
}

impl From<&AuthenticatedUser> for ProtectedResponseData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            message: "This is a protected route".to_string(),
            user: AuthenticatedUserData {
                id: user.id,
                email: user.email.clone(),
            },
        }
    }
}
