//! Coffee CRUD routes. `/search/:name` and `/:id` differ in segment count,
//! so the paths never overlap; a bare `/search` falls through to `:id` and
//! fails id parsing.

use crate::handlers::coffee::{create, delete as delete_handler, list, read, search, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn coffee_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/search/:name", get(search))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
