use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    application::screams::dto::CreateScreamRequest,
    domain::shared::pagination::PaginationRequest,
    presentation::http::{
        errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
    },
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

pub async fn list_screams(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let screams = state
        .screams
        .list(PaginationRequest {
            limit: params.limit,
            offset: params.offset,
        })
        .await?;
    Ok(Json(serde_json::to_value(screams).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn create_scream(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateScreamRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let scream = state
        .screams
        .create(body.body, &claims.sub, &claims.image_url)
        .await?;
    Ok(Json(serde_json::to_value(scream).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn get_scream(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let detail = state.screams.get(id).await?;
    Ok(Json(serde_json::to_value(detail).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn delete_scream(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    state.screams.delete(id, &claims.sub).await?;
    Ok(Json(
        serde_json::json!({ "message": "Scream deleted successfully" }),
    ))
}
