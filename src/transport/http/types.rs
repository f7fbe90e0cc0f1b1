use crate::app::catalog_service::MovieCatalog;
use crate::app::credentials::{CredentialCheck, DirectoryCredentialCheck};
use crate::app::user_directory::UserDirectory;
use crate::domain::User;
use crate::error::CatalogError;
use crate::infra::stores::Stores;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieCatalog,
    pub users: UserDirectory,
    pub credentials: Arc<dyn CredentialCheck>,
    /// Guard `/movies/{id}` routes with header credentials.
    pub require_auth: bool,
}

impl AppState {
    /// Wires the catalog and directory over `stores`, checking credentials
    /// against the same directory.
    pub fn new(stores: Stores, require_auth: bool) -> Self {
        let users = UserDirectory::new(stores.users);
        Self {
            movies: MovieCatalog::new(stores.movies),
            credentials: Arc::new(DirectoryCredentialCheck::new(users.clone())),
            users,
            require_auth,
        }
    }
}

/// Response envelope shared by every JSON endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

impl ApiResponse {
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: Some(message.into()),
            data: None,
            error: Some(true),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// `{status, data}` with the given status code.
pub fn data_response<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => ApiResponse {
            status: status.as_u16(),
            message: None,
            data: Some(value),
            error: None,
        }
        .into_response_with(status),
        Err(e) => CatalogError::Backend(format!("Failed to serialize response: {}", e)).into_response(),
    }
}

/// Malformed or wrongly typed JSON bodies are validation failures.
pub fn json_400(err: JsonRejection, expected: &str) -> CatalogError {
    CatalogError::Validation(format!("Invalid JSON body: {} (expected: {})", err, expected))
}

/// A request without a JSON content type carries no fields, so it reads as the
/// empty input. Bodies that are JSON but malformed still fail.
pub fn json_or_default<T: Default>(
    request: Result<Json<T>, JsonRejection>,
    expected: &str,
) -> Result<T, CatalogError> {
    match request {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(err) => Err(json_400(err, expected)),
    }
}

pub fn query_400(err: QueryRejection) -> CatalogError {
    CatalogError::Validation(format!("Invalid query string: {}", err))
}

/// Inserted into request extensions by the header auth guard.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub User);

/// Raw `key=value` pairs in request order. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

fn values_for<'a>(pairs: &'a [(String, String)], key: &'a str) -> impl Iterator<Item = &'a str> {
    pairs
        .iter()
        .filter(move |(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Field to sort ascending by: `id`, `title`, `year` or `rating`.
    pub sort: Option<String>,
}

impl ListMoviesQuery {
    /// Repeated `sort` values are joined with `,`, which names no field.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let values: Vec<&str> = values_for(pairs, "sort").collect();
        Self {
            sort: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term echoed back in `data`. Repeat it to echo a list.
    pub s: Vec<String>,
}

impl SearchQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            s: values_for(pairs, "s").map(str::to_string).collect(),
        }
    }

    /// The echoed term: a single value as a string, repeats as an array.
    /// `None` when absent or a lone empty value.
    pub fn term(&self) -> Option<JsonValue> {
        match self.s.as_slice() {
            [] => None,
            [only] if only.is_empty() => None,
            [only] => Some(JsonValue::String(only.clone())),
            many => Some(JsonValue::from(many.to_vec())),
        }
    }
}
