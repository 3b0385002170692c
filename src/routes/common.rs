//! Fixed routes: greeting and health.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct GreetingBody {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn root() -> Json<GreetingBody> {
    Json(GreetingBody {
        message: "Hello Coffee World",
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "Health OK",
    })
}

/// Stateless routes: GET / and GET /health.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
