use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::protected::protected;
use super::middleware::authorize;
use crate::domain::access::ports::TokenIntrospector;

pub struct AppState<I>
where
    I: TokenIntrospector,
{
    pub introspector: Arc<I>,
}

// Derived Clone would require I: Clone; only the Arc is cloned.
impl<I> Clone for AppState<I>
where
    I: TokenIntrospector,
{
    fn clone(&self) -> Self {
        Self {
            introspector: Arc::clone(&self.introspector),
        }
    }
}

pub fn create_router<I>(introspector: Arc<I>) -> Router
where
    I: TokenIntrospector,
{
    let state = AppState { introspector };

    let public_routes = Router::new().route("/", get(health));

    let protected_routes = Router::new()
        .route("/api/protected", get(protected))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authorize::<I>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers stay out of the span; the authorization header
            // carries live bearer tokens.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
