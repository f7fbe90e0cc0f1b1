//! Process-local stores. State lives for as long as the store value.

use crate::domain::{seed_movies, Movie, MoviePatch, NewMovie, NewUser, User, UserPatch};
use crate::error::Result;
use crate::storage::{MovieStore, UserStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Store pre-populated with the four catalog seed titles.
    pub fn seeded() -> Self {
        Self::new(seed_movies())
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie> {
        let mut movies = self.movies.write().await;
        let id = movies.iter().map(|m| m.id).max().unwrap_or(0).max(0) + 1;
        let stored = Movie {
            id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
        };
        movies.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<bool> {
        let mut movies = self.movies.write().await;
        match movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                patch.apply(movie);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        let stored = User {
            id: users.len() as i64 + 1,
            username: user.username,
            password: user.password,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, patch: &UserPatch) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            patch.apply(user);
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }
}
