//! Opens the configured store backend.

use crate::infra::config::{self, StoreBackend};
use crate::storage::{self, InMemoryMovieStore, InMemoryUserStore, MovieStore, PgMovieStore, PgUserStore, UserStore};
use std::sync::Arc;
use tracing::info;

pub struct Stores {
    pub movies: Arc<dyn MovieStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    /// Seeded movies, empty user directory.
    pub fn in_memory() -> Self {
        Self {
            movies: Arc::new(InMemoryMovieStore::seeded()),
            users: Arc::new(InMemoryUserStore::default()),
        }
    }

    pub async fn postgres(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = storage::postgres::connect(database_url, max_connections).await?;
        Ok(Self {
            movies: Arc::new(PgMovieStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool)),
        })
    }
}

/// Opens whatever `STORE_BACKEND` selects.
pub async fn open_from_env() -> anyhow::Result<Stores> {
    match config::store_backend()? {
        StoreBackend::Memory => {
            info!("using in-memory stores (state resets on restart)");
            Ok(Stores::in_memory())
        }
        StoreBackend::Postgres => {
            let url = config::database_url()?;
            let max_connections = config::db_max_connections();
            info!(max_connections, "connecting to postgres");
            Stores::postgres(&url, max_connections).await
        }
    }
}
