//! Coffee handlers: list, create, read, search, update, delete.

use crate::error::ApiError;
use crate::model::{CoffeeUpdate, NewCoffee};
use crate::service::{CoffeeRepo, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

/// Pagination parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let records = CoffeeRepo::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(records))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCoffee>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    RequestValidator::validate_create(&payload)?;
    let created = CoffeeRepo::create(&state.pool, &payload).await?;
    Ok((axum::http::StatusCode::CREATED, Json(created)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let record = CoffeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(record))
}

pub async fn search(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let records = CoffeeRepo::search_by_name(&state.pool, &name).await?;
    Ok(Json(records))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<CoffeeUpdate>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    RequestValidator::validate_update(&changes)?;
    let updated = CoffeeRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    if !CoffeeRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound(id));
    }
    Ok(axum::http::StatusCode::NO_CONTENT)
}
