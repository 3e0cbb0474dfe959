use std::sync::Arc;

use gateway_service::config::Config;
use gateway_service::inbound::http::router::create_router;
use gateway_service::outbound::introspection::ProviderIntrospector;
use identity::provider::IdentityClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gateway-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The provider API key stays out of the logs.
    tracing::info!(
        provider_base_url = %config.provider.base_url,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let client = IdentityClient::new(&config.provider.base_url, &config.provider.api_key)?;
    let introspector = Arc::new(ProviderIntrospector::new(client));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(introspector);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
