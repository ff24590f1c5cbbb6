mod health;
mod market;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tickbridge_core::Resolver;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

/// Shared handler state. The resolver itself is stateless; this exists only
/// to hand one clone of the upstream client to every request.
pub struct AppState {
    pub resolver: Resolver,
}

/// Ceiling for a whole inbound request. Generous on purpose: a resolution
/// can walk several candidates at up to 20 s of upstream time each, but a
/// hung chain must not hold the connection forever.
const REQUEST_DEADLINE: Duration = Duration::from_secs(90);

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/quote", get(market::get_quote))
        .route("/api/candles", get(market::get_candles))
        .route("/api/health", get(health::get_health))
        .layer(TimeoutLayer::new(REQUEST_DEADLINE))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
