//! Storage backends for movies and users.
//!
//! The catalog and the directory only talk to these traits, so the in-memory
//! stores, the Postgres stores and test fakes are interchangeable.

use crate::domain::{Movie, MoviePatch, NewMovie, NewUser, User, UserPatch};
use crate::error::Result;
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryMovieStore, InMemoryUserStore};
pub use postgres::{PgMovieStore, PgUserStore};

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All movies in insertion order.
    async fn list(&self) -> Result<Vec<Movie>>;

    /// First movie whose id equals `id`.
    async fn get(&self, id: i64) -> Result<Option<Movie>>;

    /// Assigns `max(existing ids, 0) + 1`, appends and returns the stored record.
    async fn create(&self, movie: NewMovie) -> Result<Movie>;

    /// Applies `patch` to the first match. Returns `false` if no movie has `id`.
    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<bool>;

    /// Removes the first match. Returns `false` if no movie has `id`.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Cheap reachability check used by `/health`.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>>;

    async fn get(&self, id: i64) -> Result<Option<User>>;

    /// Assigns `collection length + 1`. After a deletion this may repeat an id.
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Returns the updated record, or `None` if no user has `id`.
    async fn update(&self, id: i64, patch: &UserPatch) -> Result<Option<User>>;

    async fn delete(&self, id: i64) -> Result<bool>;

    /// Exact match on both username and password.
    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<User>>;

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
