use std::sync::Arc;

use gateway_service::inbound::http::router::create_router;
use gateway_service::outbound::introspection::ProviderIntrospector;
use identity::provider::IdentityClient;
use wiremock::MockServer;

/// API key the test application hands to its identity client.
pub const PROVIDER_API_KEY: &str = "test-api-key";

/// Test application that spawns a real server against a stubbed identity
/// provider.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let provider = MockServer::start().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let client = IdentityClient::new(&provider.uri(), PROVIDER_API_KEY)
            .expect("Failed to create identity client");
        let introspector = Arc::new(ProviderIntrospector::new(client));

        let router = create_router(introspector);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            provider,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Requests the stubbed provider has seen so far.
    pub async fn provider_requests(&self) -> Vec<wiremock::Request> {
        self.provider
            .received_requests()
            .await
            .expect("Failed to read recorded requests")
    }
}
