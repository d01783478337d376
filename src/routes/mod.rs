//! Route assembly: the full application router with CORS, body limit, and request tracing.

mod bug;
mod common;

pub use bug::bug_routes;
pub use common::{common_routes, not_found};

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::{http::HeaderValue, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Prefix under which the bug routes are mounted.
pub const BUGS_PATH: &str = "/api/bugs";

pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes())
        .nest(BUGS_PATH, bug_routes(state))
        .fallback(not_found)
        .layer(
            // The body limit stays outermost: `Cors` needs a `Default` response body.
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
