//! Header auth guard for movie-by-id routes.
//!
//! Reads plaintext `username` / `password` headers and asks the configured
//! [`CredentialCheck`](crate::app::credentials::CredentialCheck) for a match.

use crate::error::CatalogError;
use crate::transport::http::types::{AppState, AuthenticatedUser};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

pub const USERNAME_HEADER: &str = "username";
pub const PASSWORD_HEADER: &str = "password";

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub async fn require_credentials(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let username = header_value(request.headers(), USERNAME_HEADER).to_string();
    let password = header_value(request.headers(), PASSWORD_HEADER).to_string();

    match state.credentials.verify(&username, &password).await {
        Ok(Some(user)) => {
            debug!(user = %user.username, path = %request.uri().path(), "credentials accepted");
            request.extensions_mut().insert(AuthenticatedUser(user));
            next.run(request).await
        }
        Ok(None) => {
            warn!(user = %username, path = %request.uri().path(), "credentials rejected");
            CatalogError::Unauthorized("Unauthorized".to_string()).into_response()
        }
        Err(e) => e.into_response(),
    }
}
