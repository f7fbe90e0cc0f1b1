//! Credential checks used by the header auth guard.
//!
//! The guard only knows this trait, so the comparison can be replaced without
//! touching routing.

use crate::app::user_directory::UserDirectory;
use crate::domain::User;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CredentialCheck: Send + Sync {
    /// Resolves a username/password pair to a user, or `None` on mismatch.
    async fn verify(&self, username: &str, password: &str) -> Result<Option<User>>;
}

/// Exact plaintext match against the user directory.
pub struct DirectoryCredentialCheck {
    directory: UserDirectory,
}

impl DirectoryCredentialCheck {
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl CredentialCheck for DirectoryCredentialCheck {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.directory.authenticate(username, password).await
    }
}
