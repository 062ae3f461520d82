use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use uuid::Uuid;

use crate::{
    application::social::dto::AddCommentRequest,
    presentation::http::{
        errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
    },
};

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<AddCommentRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let comment = state
        .social
        .add_comment(id, body.body, &claims.sub, &claims.image_url)
        .await?;
    Ok(Json(serde_json::to_value(comment).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn like_scream(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let scream = state.social.like(id, &claims.sub).await?;
    Ok(Json(serde_json::to_value(scream).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}

pub async fn unlike_scream(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let scream = state.social.unlike(id, &claims.sub).await?;
    Ok(Json(serde_json::to_value(scream).map_err(|e| {
        AppError::Internal(e.to_string())
    })?))
}
