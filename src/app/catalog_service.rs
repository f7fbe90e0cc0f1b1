//! The Movie Catalog Service.
//!
//! Sits between the HTTP handlers and a [`MovieStore`]. It is responsible for:
//! 1.  Turning raw path ids and request bodies into typed values.
//! 2.  Ordering listings by a requested field.
//! 3.  Reporting not-found and validation failures as distinct errors.

use crate::domain::input::parse_int_prefix;
use crate::domain::{sort_movies, Movie, MovieInput, MovieUpdateInput, SortKey};
use crate::error::{CatalogError, Result};
use crate::storage::MovieStore;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct MovieCatalog {
    store: Arc<dyn MovieStore>,
}

impl MovieCatalog {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn MovieStore> {
        &self.store
    }

    /// All movies, optionally ordered ascending by `sort`.
    ///
    /// An empty or unrecognised sort name returns the current order unchanged.
    pub async fn list(&self, sort: Option<&str>) -> Result<Vec<Movie>> {
        let mut movies = self.store.list().await?;
        if let Some(name) = sort.filter(|s| !s.is_empty()) {
            match SortKey::parse(name) {
                Some(key) => sort_movies(&mut movies, key),
                None => debug!(sort = name, "unknown sort key, keeping current order"),
            }
        }
        Ok(movies)
    }

    /// All movies ascending by `key`.
    pub async fn list_by(&self, key: SortKey) -> Result<Vec<Movie>> {
        let mut movies = self.store.list().await?;
        sort_movies(&mut movies, key);
        Ok(movies)
    }

    /// Highest rated first: ascending by rating, then reversed.
    pub async fn list_by_rating_desc(&self) -> Result<Vec<Movie>> {
        let mut movies = self.list_by(SortKey::Rating).await?;
        movies.reverse();
        Ok(movies)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Movie> {
        let id = parse_int_prefix(raw_id).ok_or_else(|| CatalogError::movie_not_found(raw_id))?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::movie_not_found(raw_id))
    }

    pub async fn create(&self, input: &MovieInput) -> Result<Movie> {
        let new_movie = input.validate()?;
        let movie = self.store.create(new_movie).await?;
        info!(id = movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    /// Applies the provided `title` / `rating`. `year` is never changed.
    pub async fn update(&self, raw_id: &str, input: &MovieUpdateInput) -> Result<()> {
        let patch = input.validate()?;
        let id = parse_int_prefix(raw_id).ok_or_else(|| CatalogError::movie_not_found(raw_id))?;
        if !self.store.update(id, &patch).await? {
            return Err(CatalogError::movie_not_found(raw_id));
        }
        info!(id, "movie updated");
        Ok(())
    }

    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let id = parse_int_prefix(raw_id).ok_or_else(|| CatalogError::movie_not_found(raw_id))?;
        if !self.store.delete(id).await? {
            return Err(CatalogError::movie_not_found(raw_id));
        }
        info!(id, "movie deleted");
        Ok(())
    }
}
