use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::json;
use serde_json::Value;
use tracing::debug;
use tracing::info_span;
use tracing::Instrument;

use crate::provider::errors::ProviderError;
use crate::provider::types::ProviderSession;
use crate::provider::types::ProviderUser;
use crate::provider::types::SignUpMetadata;

/// User agent presented to the identity provider.
const USER_AGENT: &str = concat!("identity/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote identity provider.
///
/// One instance is built at process start and shared by everything that
/// talks to the provider. Cloning is cheap (the underlying connection pool
/// is reused) and the handle is read-only after construction, so it can be
/// injected into the sign-in flow and the token gate alike.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl IdentityClient {
    /// Build a client for the provider at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Provider origin, e.g. `https://accounts.example.com`
    /// * `api_key` - Public API key sent with every request
    ///
    /// # Errors
    /// * `BadUrl` - Base URL cannot be parsed or cannot serve as a base
    /// * `Transport` - Underlying HTTP client could not be constructed
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ProviderError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ProviderError::BadUrl(e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ProviderError::BadUrl(format!(
                "{base_url} cannot serve as a base URL"
            )));
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        debug!(base_url = %base_url, "identity provider client ready");

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Exchange an email and password for a session.
    ///
    /// # Arguments
    /// * `email` - Account email address
    /// * `password` - Plaintext password, sent over the wire only
    ///
    /// # Returns
    /// Session envelope with the opaque access token and the signed-in user
    ///
    /// # Errors
    /// * `Rejected` - Provider refused the credentials; message is verbatim
    /// * `Transport` - Request could not be sent or the body not read
    /// * `Decode` - Response body did not match the session shape
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let url = self.endpoint("/auth/v1/token")?;

        let span = info_span!("provider.sign_in", http.method = "POST", url = %url);
        let response = self
            .http
            .post(url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .instrument(span)
            .await?;

        let body = success_body(response).await?;
        decode(body)
    }

    /// Register a new account.
    ///
    /// # Arguments
    /// * `email` - Account email address
    /// * `password` - Plaintext password, sent over the wire only
    /// * `phone` - Phone number stored on the account record
    /// * `metadata` - Profile metadata stored alongside the account
    ///
    /// # Returns
    /// The created user record
    ///
    /// # Errors
    /// * `Rejected` - Provider refused the registration; message is verbatim
    /// * `Transport` - Request could not be sent or the body not read
    /// * `Decode` - Response body did not contain a user record
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        phone: &str,
        metadata: &SignUpMetadata,
    ) -> Result<ProviderUser, ProviderError> {
        let url = self.endpoint("/auth/v1/signup")?;

        let span = info_span!("provider.sign_up", http.method = "POST", url = %url);
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .json(&json!({
                "email": email,
                "password": password,
                "phone": phone,
                "data": metadata,
            }))
            .send()
            .instrument(span)
            .await?;

        let body = success_body(response).await?;

        // When the provider requires email confirmation the response is the
        // bare user object; with auto-confirm it is a session wrapping one.
        let user_body = match body.get("user") {
            Some(user) if !user.is_null() => user.clone(),
            _ => body,
        };

        decode(user_body)
    }

    /// Resolve the user identity behind a bearer token.
    ///
    /// The token is forwarded verbatim; all trust decisions (signature,
    /// expiry, revocation) stay with the provider.
    ///
    /// # Arguments
    /// * `token` - Opaque bearer token presented by a caller
    ///
    /// # Returns
    /// The user the token belongs to
    ///
    /// # Errors
    /// * `Rejected` - Provider did not recognize the token
    /// * `Transport` - Request could not be sent or the body not read
    /// * `Decode` - Response body did not contain a user record
    pub async fn introspect(&self, token: &str) -> Result<ProviderUser, ProviderError> {
        let url = self.endpoint("/auth/v1/user")?;

        let span = info_span!("provider.introspect", http.method = "GET", url = %url);
        let response = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .instrument(span)
            .await?;

        let body = success_body(response).await?;
        decode(body)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        self.base_url
            .join(path)
            .map_err(|e| ProviderError::BadUrl(e.to_string()))
    }
}

/// Read a response body, turning non-success statuses into `Rejected`.
async fn success_body(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();

    if !status.is_success() {
        let body: Value = response.json().await.unwrap_or(Value::Null);
        return Err(ProviderError::Rejected(rejection_message(&body, status)));
    }

    Ok(response.json().await?)
}

/// Pull the human-readable message out of a provider error body.
///
/// The provider is not consistent about the field name across endpoints, so
/// the known spellings are probed in order.
fn rejection_message(body: &Value, status: StatusCode) -> String {
    ["error_description", "msg", "error", "message"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("authentication request failed ({status})"))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ProviderError> {
    serde_json::from_value(body).map_err(|e| ProviderError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;
    use wiremock::matchers::body_json;
    use wiremock::matchers::header;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::matchers::query_param;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;

    use super::*;

    const API_KEY: &str = "public-api-key";
    const USER_ID: &str = "5f7f0ac5-2d0a-4e9b-9d31-5c4b9a36c2f1";

    fn user_body() -> Value {
        json!({
            "id": USER_ID,
            "email": "user@example.com",
            "phone": "",
            "created_at": "2024-05-04T10:00:00Z"
        })
    }

    fn client_for(server: &MockServer) -> IdentityClient {
        IdentityClient::new(&server.uri(), API_KEY).expect("client must build")
    }

    #[tokio::test]
    async fn test_sign_in_returns_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", API_KEY))
            .and(body_json(json!({
                "email": "user@example.com",
                "password": "Password1!"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "opaque-token",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh-token",
                "user": user_body(),
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = client
            .sign_in_with_password("user@example.com", "Password1!")
            .await
            .expect("sign-in must succeed");

        assert_eq!(session.access_token, "opaque-token");
        assert_eq!(session.user.id, Uuid::parse_str(USER_ID).unwrap());
        assert_eq!(session.user.email.as_deref(), Some("user@example.com"));
    }

    #[tokio::test]
    async fn test_sign_in_surfaces_provider_message_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client
            .sign_in_with_password("user@example.com", "wrong")
            .await
            .expect_err("sign-in must fail");

        assert!(matches!(error, ProviderError::Rejected(_)));
        assert_eq!(error.to_string(), "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_sign_in_falls_back_to_status_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client
            .sign_in_with_password("user@example.com", "Password1!")
            .await
            .expect_err("sign-in must fail");

        assert_eq!(
            error.to_string(),
            "authentication request failed (500 Internal Server Error)"
        );
    }

    #[tokio::test]
    async fn test_sign_up_sends_phone_and_metadata() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .and(header("apikey", API_KEY))
            .and(body_json(json!({
                "email": "new@example.com",
                "password": "Abc12345!",
                "phone": "+15551234567",
                "data": {
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "phone": "+15551234567"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let metadata = SignUpMetadata {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "+15551234567".to_string(),
        };

        let user = client
            .sign_up("new@example.com", "Abc12345!", "+15551234567", &metadata)
            .await
            .expect("sign-up must succeed");

        assert_eq!(user.id, Uuid::parse_str(USER_ID).unwrap());
    }

    #[tokio::test]
    async fn test_sign_up_accepts_session_envelope() {
        let server = MockServer::start().await;

        // Auto-confirm deployments answer /signup with a full session.
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "opaque-token",
                "token_type": "bearer",
                "user": user_body(),
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let metadata = SignUpMetadata {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "+15551234567".to_string(),
        };

        let user = client
            .sign_up("new@example.com", "Abc12345!", "+15551234567", &metadata)
            .await
            .expect("sign-up must succeed");

        assert_eq!(user.email.as_deref(), Some("user@example.com"));
    }

    #[tokio::test]
    async fn test_sign_up_reads_msg_error_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "code": 422,
                "msg": "User already registered"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let metadata = SignUpMetadata {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "+15551234567".to_string(),
        };

        let error = client
            .sign_up("new@example.com", "Abc12345!", "+15551234567", &metadata)
            .await
            .expect_err("sign-up must fail");

        assert_eq!(error.to_string(), "User already registered");
    }

    #[tokio::test]
    async fn test_introspect_forwards_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", API_KEY))
            .and(header("authorization", "Bearer opaque-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let user = client
            .introspect("opaque-token")
            .await
            .expect("introspection must succeed");

        assert_eq!(user.id, Uuid::parse_str(USER_ID).unwrap());
    }

    #[tokio::test]
    async fn test_introspect_rejects_unknown_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "msg": "invalid claim: missing sub claim"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client
            .introspect("garbage")
            .await
            .expect_err("introspection must fail");

        assert!(matches!(error, ProviderError::Rejected(_)));
    }

    #[test]
    fn test_new_rejects_unparseable_base_url() {
        let error = IdentityClient::new("not a url", API_KEY).expect_err("must fail");
        assert!(matches!(error, ProviderError::BadUrl(_)));
    }
}
