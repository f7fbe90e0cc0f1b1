use crate::error::CatalogError;
use crate::transport::http::types::{query_400, ApiResponse, QueryPairs, SearchQuery};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;

#[utoipa::path(
    get,
    path = "/time",
    responses((status = 200, description = "Current local time as HH:MM", body = ApiResponse))
)]
pub async fn time_handler() -> Response {
    let now = chrono::Local::now().format("%H:%M").to_string();
    ApiResponse::message(StatusCode::OK, now).into_response_with(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "Greets the world", body = ApiResponse))
)]
pub async fn hello_world_handler() -> Response {
    ApiResponse::message(StatusCode::OK, "Hello, World!").into_response_with(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/hello/{id}",
    params(("id" = String, Path, description = "Name to greet")),
    responses((status = 200, description = "Greeting", body = ApiResponse))
)]
pub async fn hello_handler(Path(id): Path<String>) -> Response {
    ApiResponse::message(StatusCode::OK, format!("Hello, {}", id)).into_response_with(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search term echoed in data", body = ApiResponse),
        (status = 400, description = "Unreadable query string", body = ApiResponse),
        (status = 500, description = "No search term given", body = ApiResponse)
    )
)]
pub async fn search_handler(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, CatalogError> {
    let Query(pairs) = query.map_err(query_400)?;
    let response = match SearchQuery::from_pairs(&pairs).term() {
        Some(term) => {
            let mut body = ApiResponse::message(StatusCode::OK, "ok");
            body.data = Some(term);
            body.into_response_with(StatusCode::OK)
        }
        None => ApiResponse::failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "You have to provide a search",
        )
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR),
    };
    Ok(response)
}
