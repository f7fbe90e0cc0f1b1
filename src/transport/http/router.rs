use crate::domain::{Movie, MovieInput, MovieUpdateInput, User, UserInput};
use crate::transport::http::handlers::{greeting, health, movies, users};
use crate::transport::http::middleware::auth;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        health::healthcheck_handler,
        health::test_handler,
        greeting::time_handler,
        greeting::hello_world_handler,
        greeting::hello_handler,
        greeting::search_handler,
        movies::list_movies_handler,
        movies::movies_by_date_handler,
        movies::movies_by_rating_handler,
        movies::movies_by_title_handler,
        movies::get_movie_handler,
        movies::create_movie_handler,
        movies::update_movie_handler,
        movies::delete_movie_handler,
        users::list_users_handler,
        users::get_user_handler,
        users::create_user_handler,
        users::update_user_handler,
        users::delete_user_handler
    ),
    components(schemas(ApiResponse, Movie, MovieInput, MovieUpdateInput, User, UserInput))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let mut movie_by_id: Router<AppState> = Router::new().route(
        "/movies/:id",
        get(movies::get_movie_handler)
            .put(movies::update_movie_handler)
            .delete(movies::delete_movie_handler),
    );
    if app_state.require_auth {
        movie_by_id = movie_by_id.route_layer(from_fn_with_state(
            app_state.clone(),
            auth::require_credentials,
        ));
    }

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/test", get(health::test_handler))
        .route("/time", get(greeting::time_handler))
        .route("/hello", get(greeting::hello_world_handler))
        .route("/hello/:id", get(greeting::hello_handler))
        .route("/search", get(greeting::search_handler))
        .route(
            "/movies",
            get(movies::list_movies_handler).post(movies::create_movie_handler),
        )
        .route("/movies/read/by-date", get(movies::movies_by_date_handler))
        .route("/movies/read/by-rating", get(movies::movies_by_rating_handler))
        .route("/movies/read/by-title", get(movies::movies_by_title_handler))
        .merge(movie_by_id)
        .route(
            "/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            "/users/:id",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
        .with_state(app_state)
}
