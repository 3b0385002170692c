//! Route composition: fixed routes plus the coffee API under /coffee.

pub mod coffee;
pub mod common;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use coffee::coffee_routes;
pub use common::common_routes;

/// Full application router with permissive CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .merge(common_routes())
        .nest("/coffee", coffee_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
