//! Centralized configuration (environment variables + defaults).
//!
//! Call `dotenv::dotenv()` before reading so a local `.env` file is honoured.

use anyhow::{anyhow, Context};

/// Which store implementation backs the catalog and the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl StoreBackend {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "memory" => Ok(StoreBackend::Memory),
            "postgres" | "pg" => Ok(StoreBackend::Postgres),
            other => Err(anyhow!(
                "STORE_BACKEND must be 'memory' or 'postgres' (got '{}')",
                other
            )),
        }
    }
}

/// Interface to bind (default `0.0.0.0`).
pub fn host() -> String {
    std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
}

/// Port to listen on (default 3000).
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number (got '{}')", v)),
        Err(_) => Ok(3000),
    }
}

/// `HOST:PORT`, resolved by the listener (hostnames are allowed).
pub fn bind_addr() -> anyhow::Result<String> {
    Ok(format!("{}:{}", host(), port()?))
}

/// Store backend (default `memory`).
pub fn store_backend() -> anyhow::Result<StoreBackend> {
    StoreBackend::parse(&std::env::var("STORE_BACKEND").unwrap_or_default())
}

/// Database URL, required only for the postgres backend.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow!("DATABASE_URL must be set when STORE_BACKEND=postgres"))
}

/// Pool size for the postgres backend (default 5).
pub fn db_max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(5)
        .max(1)
}

/// Whether `/movies/{id}` routes require `username`/`password` headers (default false).
pub fn require_auth() -> bool {
    parse_flag(&std::env::var("REQUIRE_AUTH").unwrap_or_default())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
