use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MISSING_USER_FIELDS: &str = "Please provide username and password.";

/// Directory entry. The password is plaintext and is stored as given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
    }
}

/// Create / update body for `/users`.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UserInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserInput {
    pub fn validate_new(&self) -> Result<NewUser> {
        match (non_empty(&self.username), non_empty(&self.password)) {
            (Some(username), Some(password)) => Ok(NewUser { username, password }),
            _ => Err(CatalogError::Validation(MISSING_USER_FIELDS.to_string())),
        }
    }

    /// Omitted or empty fields keep the existing value.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            username: non_empty(&self.username),
            password: non_empty(&self.password),
        }
    }
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_username_and_password() {
        let input = UserInput {
            username: Some("ada".to_string()),
            password: Some(String::new()),
        };
        assert_eq!(
            input.validate_new(),
            Err(CatalogError::Validation(MISSING_USER_FIELDS.to_string()))
        );
    }

    #[test]
    fn patch_keeps_omitted_fields() {
        let mut user = User {
            id: 1,
            username: "ada".to_string(),
            password: "lovelace".to_string(),
        };
        let input = UserInput {
            username: None,
            password: Some("engine".to_string()),
        };
        input.to_patch().apply(&mut user);
        assert_eq!(user.username, "ada");
        assert_eq!(user.password, "engine");
    }
}
