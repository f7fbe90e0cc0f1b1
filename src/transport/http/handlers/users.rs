use crate::domain::UserInput;
use crate::error::CatalogError;
use crate::transport::http::types::{data_response, json_or_default, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

const USER_BODY: &str = r#"{"username": "...", "password": "..."}"#;

#[utoipa::path(
    get,
    path = "/users",
    responses((status = 200, description = "All users", body = ApiResponse))
)]
pub async fn list_users_handler(State(state): State<AppState>) -> Result<Response, CatalogError> {
    let users = state.users.list().await?;
    Ok(data_response(StatusCode::OK, &users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = ApiResponse),
        (status = 404, description = "No user with that id", body = ApiResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    let user = state.users.get(&id).await?;
    Ok(data_response(StatusCode::OK, &user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = ApiResponse),
        (status = 400, description = "Missing username or password", body = ApiResponse)
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    request: Result<Json<UserInput>, JsonRejection>,
) -> Result<Response, CatalogError> {
    let input = json_or_default(request, USER_BODY)?;
    let user = state.users.create(&input).await?;
    Ok(data_response(StatusCode::CREATED, &user))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UserInput,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse),
        (status = 404, description = "No user with that id", body = ApiResponse)
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UserInput>, JsonRejection>,
) -> Result<Response, CatalogError> {
    let input = json_or_default(request, USER_BODY)?;
    let user = state.users.update(&id, &input).await?;
    Ok(data_response(StatusCode::OK, &user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted; data holds the remaining users", body = ApiResponse),
        (status = 404, description = "No user with that id", body = ApiResponse)
    )
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    state.users.delete(&id).await?;
    let users = state.users.list().await?;
    Ok(data_response(StatusCode::OK, &users))
}
