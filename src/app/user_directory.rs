//! User Directory: plain CRUD over a [`UserStore`], no sorting.

use crate::domain::input::parse_int_prefix;
use crate::domain::{User, UserInput};
use crate::error::{CatalogError, Result};
use crate::storage::UserStore;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.store.list().await
    }

    pub async fn get(&self, raw_id: &str) -> Result<User> {
        let id = parse_int_prefix(raw_id).ok_or_else(|| CatalogError::user_not_found(raw_id))?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::user_not_found(raw_id))
    }

    pub async fn create(&self, input: &UserInput) -> Result<User> {
        let new_user = input.validate_new()?;
        let user = self.store.create(new_user).await?;
        info!(id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub async fn update(&self, raw_id: &str, input: &UserInput) -> Result<User> {
        let id = parse_int_prefix(raw_id).ok_or_else(|| CatalogError::user_not_found(raw_id))?;
        let user = self
            .store
            .update(id, &input.to_patch())
            .await?
            .ok_or_else(|| CatalogError::user_not_found(raw_id))?;
        info!(id, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let id = parse_int_prefix(raw_id).ok_or_else(|| CatalogError::user_not_found(raw_id))?;
        if !self.store.delete(id).await? {
            return Err(CatalogError::user_not_found(raw_id));
        }
        info!(id, "user deleted");
        Ok(())
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.store.find_by_credentials(username, password).await
    }
}
