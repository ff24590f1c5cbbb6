//! HTTP surface for the tickbridge market-data proxy.
//!
//! Thin by design: routing, request validation, and JSON envelope formatting
//! only. Everything with real logic lives in `tickbridge-core`; handlers
//! call the stateless [`Resolver`] and translate its outcome into a status
//! code and body.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tickbridge_core::{ReqwestHttpClient, Resolver, YahooClient};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::routes::AppState;

/// Build the production application: API routes over a reqwest transport,
/// with the dashboard's static files as the fallback service.
pub fn build_app(config: &Config) -> Router {
    let http = Arc::new(ReqwestHttpClient::new());
    let resolver = Resolver::new(YahooClient::new(http));
    app_with_resolver(resolver, config)
}

/// Build the application over an explicit resolver. Tests inject a resolver
/// backed by a scripted transport here.
pub fn app_with_resolver(resolver: Resolver, config: &Config) -> Router {
    let state = Arc::new(AppState { resolver });
    routes::app_router(state).fallback_service(ServeDir::new(&config.static_dir))
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
