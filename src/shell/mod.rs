// Composition root for the books bounded context.
//
// Responsibilities
// - Wire the repository into the HTTP and GraphQL inbound adapters.
// - Apply the cross-cutting layers (request tracing, CORS).
// - The binary in main.rs reads config, initialises logging and serves `app`.

pub mod graphql;
pub mod http;
pub mod state;

use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::shared::infrastructure::config::ServerConfig;
use crate::shell::state::AppState;

pub fn app(state: AppState, config: &ServerConfig) -> Router {
    http::router(state.clone())
        .merge(graphql::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}
