use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Liveness check", body = String))
)]
pub async fn root_handler() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (stores reachable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (a store is unreachable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> Response {
    let movies = state.movies.store().ping().await;
    let users = state.users.store().ping().await;

    match movies.and(users) {
        Ok(()) => ApiResponse::message(StatusCode::OK, "ok").into_response_with(StatusCode::OK),
        Err(e) => ApiResponse::failure(
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Store ping failed: {}", e),
        )
        .into_response_with(StatusCode::SERVICE_UNAVAILABLE),
    }
}

#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Static ok message", body = ApiResponse))
)]
pub async fn test_handler() -> impl IntoResponse {
    ApiResponse::message(StatusCode::OK, "ok").into_response_with(StatusCode::OK)
}
