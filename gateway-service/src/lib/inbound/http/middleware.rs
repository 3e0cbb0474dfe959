use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::access::ports::TokenIntrospector;
use crate::inbound::http::router::AppState;

/// Client-facing authorization failures.
///
/// The display strings are the exact response bodies. They stay fixed no
/// matter what the provider reported, so a caller cannot tell a malformed
/// token apart from an expired or revoked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

/// Middleware that admits a request only if its bearer token resolves to
/// a user.
///
/// Every protected request incurs one introspection round-trip; no
/// verdict is cached and no local token checks (signature, expiry) are
/// attempted. The resolved user is stored in the request extensions for
/// handlers downstream.
pub async fn authorize<I>(
    State(state): State<AppState<I>>,
    mut req: Request,
    next: Next,
) -> Result<Response, TokenError>
where
    I: TokenIntrospector,
{
    let token = extract_bearer_token(&req)?;

    let user = state.introspector.introspect(token).await.map_err(|e| {
        tracing::warn!(error = %e, "token introspection failed");
        TokenError::InvalidToken
    })?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// A missing header, a non-UTF-8 value, another scheme, or an empty token
/// all count as a missing token.
fn extract_bearer_token(req: &Request) -> Result<&str, TokenError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(TokenError::MissingToken)?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(TokenError::MissingToken),
    }
}
