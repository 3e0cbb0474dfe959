/// Liveness probe. Mounted outside the token gate so uptime checks never
/// need credentials.
pub async fn health() -> &'static str {
    "gateway-service is running"
}
