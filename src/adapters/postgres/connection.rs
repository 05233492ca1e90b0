//! Process-wide PostgreSQL connection manager.
//!
//! The pool is established on first use and memoized for the lifetime of the
//! process. Concurrent first callers wait on the same initialisation; a
//! failed attempt is not cached, so the next caller tries again.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Failures establishing the database connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("database connection string is not configured")]
    MissingUrl,

    #[error("database unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<ConnectionError> for DomainError {
    fn from(err: ConnectionError) -> Self {
        DomainError::connection(err.to_string())
    }
}

/// Lazily connected, memoized PostgreSQL pool.
pub struct ConnectionManager {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl ConnectionManager {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Returns the shared pool, connecting on first call.
    pub async fn connect(&self) -> Result<&PgPool, ConnectionError> {
        self.pool.get_or_try_init(|| self.establish()).await
    }

    /// Closes the pool if one was established. Later `connect` calls keep
    /// returning the closed pool, so this is for process shutdown only.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }

    async fn establish(&self) -> Result<PgPool, ConnectionError> {
        if !self.config.has_url() {
            return Err(ConnectionError::MissingUrl);
        }

        let pool = PgPoolOptions::new()
            .min_connections(self.config.min_connections)
            .max_connections(self.config.max_connections)
            .acquire_timeout(self.config.acquire_timeout())
            .connect(&self.config.url)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
                ConnectionError::Unreachable(e)
            })?;

        if self.config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        tracing::info!(
            database = %self.config.target(),
            max_connections = self.config.max_connections,
            "Connected to database"
        );
        Ok(pool)
    }
}
