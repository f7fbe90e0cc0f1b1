use crate::error::CatalogError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        CatalogError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        match &self {
            CatalogError::Backend(msg) => error!(%msg, "store failure"),
            other => warn!(status = status.as_u16(), msg = %other, "request rejected"),
        }
        ApiResponse::failure(status, self.to_string()).into_response_with(status)
    }
}
