use super::{
    handlers::{health, screams, social},
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Screams CRUD
        .route(
            "/api/v1/screams",
            get(screams::list_screams).post(screams::create_scream),
        )
        .route(
            "/api/v1/screams/{id}",
            get(screams::get_scream).delete(screams::delete_scream),
        )
        // Social
        .route("/api/v1/screams/{id}/comments", post(social::add_comment))
        .route("/api/v1/screams/{id}/like", post(social::like_scream))
        .route("/api/v1/screams/{id}/unlike", post(social::unlike_scream))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
