//! Postgres-backed stores.
//!
//! Both tables carry a `seq BIGSERIAL` column so that listing order matches
//! insertion order, the same order the in-memory stores keep.

use crate::domain::{Movie, MoviePatch, NewMovie, NewUser, User, UserPatch};
use crate::error::Result;
use crate::storage::{MovieStore, UserStore};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

/// Connects to `database_url` and makes sure both tables exist.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS movies (
            seq BIGSERIAL PRIMARY KEY,
            id BIGINT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            year BIGINT NOT NULL,
            rating DOUBLE PRECISION NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // `id` is deliberately not unique here: ids are assigned from the row count.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            seq BIGSERIAL PRIMARY KEY,
            id BIGINT NOT NULL,
            username TEXT NOT NULL,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

fn movie_from_row(row: &PgRow) -> Result<Movie> {
    Ok(Movie {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        year: row.try_get("year")?,
        rating: row.try_get("rating")?,
    })
}

fn user_from_row(row: &PgRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
    })
}

#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self) -> Result<Vec<Movie>> {
        let rows = sqlx::query("SELECT id, title, year, rating FROM movies ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(movie_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Movie>> {
        let row = sqlx::query("SELECT id, title, year, rating FROM movies WHERE id = $1 ORDER BY seq LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(movie_from_row).transpose()
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie> {
        // Id assignment and insert happen in one statement.
        let row = sqlx::query(
            "INSERT INTO movies (id, title, year, rating)
             SELECT GREATEST(COALESCE(MAX(id), 0), 0) + 1, $1, $2, $3 FROM movies
             RETURNING id, title, year, rating",
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.rating)
        .fetch_one(&self.pool)
        .await?;
        movie_from_row(&row)
    }

    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE movies SET title = COALESCE($2, title), rating = COALESCE($3, rating)
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.rating)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, password FROM users ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(user_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query("SELECT id, username, password FROM users WHERE id = $1 ORDER BY seq LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let row = sqlx::query(
            "INSERT INTO users (id, username, password)
             SELECT COUNT(*) + 1, $1, $2 FROM users
             RETURNING id, username, password",
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;
        user_from_row(&row)
    }

    async fn update(&self, id: i64, patch: &UserPatch) -> Result<Option<User>> {
        let row = sqlx::query(
            "UPDATE users SET username = COALESCE($2, username), password = COALESCE($3, password)
             WHERE seq = (SELECT seq FROM users WHERE id = $1 ORDER BY seq LIMIT 1)
             RETURNING id, username, password",
        )
        .bind(id)
        .bind(patch.username.as_deref())
        .bind(patch.password.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM users WHERE seq = (SELECT seq FROM users WHERE id = $1 ORDER BY seq LIMIT 1)",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password FROM users
             WHERE username = $1 AND password = $2 ORDER BY seq LIMIT 1",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
