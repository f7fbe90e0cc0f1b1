use crate::domain::{Movie, MovieInput, MovieUpdateInput, SortKey};
use crate::error::CatalogError;
use crate::transport::http::types::{
    data_response, json_or_default, query_400, AppState, AuthenticatedUser, ListMoviesQuery,
    QueryPairs,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::{Extension, Json};
use tracing::debug;

const MOVIE_BODY: &str = r#"{"title": "...", "year": 1975, "rating": 8}"#;
const MOVIE_PATCH_BODY: &str = r#"{"title": "...", "rating": 8}"#;

#[utoipa::path(
    get,
    path = "/movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "All movies, optionally sorted ascending", body = ApiResponse),
        (status = 400, description = "Unreadable query string", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn list_movies_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, CatalogError> {
    let Query(pairs) = query.map_err(query_400)?;
    let query = ListMoviesQuery::from_pairs(&pairs);
    let movies = state.movies.list(query.sort.as_deref()).await?;
    Ok(data_response(StatusCode::OK, &movies))
}

#[utoipa::path(
    get,
    path = "/movies/read/by-date",
    responses((status = 200, description = "Movies ascending by year", body = ApiResponse))
)]
pub async fn movies_by_date_handler(State(state): State<AppState>) -> Result<Response, CatalogError> {
    let movies = state.movies.list_by(SortKey::Year).await?;
    Ok(data_response(StatusCode::OK, &movies))
}

#[utoipa::path(
    get,
    path = "/movies/read/by-rating",
    responses((status = 200, description = "Movies highest rated first", body = ApiResponse))
)]
pub async fn movies_by_rating_handler(
    State(state): State<AppState>,
) -> Result<Response, CatalogError> {
    let movies = state.movies.list_by_rating_desc().await?;
    Ok(data_response(StatusCode::OK, &movies))
}

#[utoipa::path(
    get,
    path = "/movies/read/by-title",
    responses((status = 200, description = "Movies ascending by title", body = ApiResponse))
)]
pub async fn movies_by_title_handler(
    State(state): State<AppState>,
) -> Result<Response, CatalogError> {
    let movies = state.movies.list_by(SortKey::Title).await?;
    Ok(data_response(StatusCode::OK, &movies))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = ApiResponse),
        (status = 401, description = "Credential headers did not match (when guarded)", body = ApiResponse),
        (status = 404, description = "No movie with that id", body = ApiResponse)
    )
)]
pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Response, CatalogError> {
    if let Some(Extension(AuthenticatedUser(user))) = &user {
        debug!(user = %user.username, movie = %id, "authenticated movie read");
    }
    let movie: Movie = state.movies.get(&id).await?;
    Ok(data_response(StatusCode::OK, &movie))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse),
        (status = 400, description = "Missing or invalid title, year or rating", body = ApiResponse)
    )
)]
pub async fn create_movie_handler(
    State(state): State<AppState>,
    request: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Response, CatalogError> {
    let input = json_or_default(request, MOVIE_BODY)?;
    let movie = state.movies.create(&input).await?;
    Ok(data_response(StatusCode::CREATED, &movie))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    request_body = MovieUpdateInput,
    responses(
        (status = 200, description = "Updated; data holds the full list", body = ApiResponse),
        (status = 400, description = "Invalid rating", body = ApiResponse),
        (status = 401, description = "Credential headers did not match (when guarded)", body = ApiResponse),
        (status = 404, description = "No movie with that id", body = ApiResponse)
    )
)]
pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<MovieUpdateInput>, JsonRejection>,
) -> Result<Response, CatalogError> {
    let input = json_or_default(request, MOVIE_PATCH_BODY)?;
    state.movies.update(&id, &input).await?;
    let movies = state.movies.list(None).await?;
    Ok(data_response(StatusCode::OK, &movies))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Deleted; data holds the remaining list", body = ApiResponse),
        (status = 401, description = "Credential headers did not match (when guarded)", body = ApiResponse),
        (status = 404, description = "No movie with that id", body = ApiResponse)
    )
)]
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    state.movies.delete(&id).await?;
    let movies = state.movies.list(None).await?;
    Ok(data_response(StatusCode::OK, &movies))
}
