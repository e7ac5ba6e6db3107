use crate::error::{AppError, AppResult};
use crate::models::User;
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

pub mod database;

/// Supported storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
    MongoDB,
}

impl FromStr for DatabaseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSQL),
            "sqlite" => Ok(DatabaseType::SQLite),
            "mongodb" | "mongo" => Ok(DatabaseType::MongoDB),
            other => Err(AppError::Configuration(format!(
                "Unsupported database type: {}",
                other
            ))),
        }
    }
}

/// Lifecycle of a storage backend
///
/// Connection handles are acquired once in `connect` and reused by every
/// call until `cleanup` releases them.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect to the storage backend
    async fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the users table/collection and its unique constraints if missing
    async fn init_schema(&self) -> AppResult<()>;

    /// Release the connection handle; later calls fail
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Storage port for users
///
/// Every adapter assigns a fresh id on `add_user` and upserts by id, so a
/// record carrying an existing id replaces that record's name and email.
/// `get_all_users` returns every stored record in backend-defined order, and
/// an empty store yields an empty vector rather than an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Persist a user under a freshly generated id and return the stored record
    async fn add_user(&self, user: &User) -> AppResult<User>;

    /// Fetch all stored users
    async fn get_all_users(&self) -> AppResult<Vec<User>>;
}

/// A connected backend that implements the user storage port
pub trait StorageBackend: Backend + UserBackend {}

impl<T> StorageBackend for T where T: Backend + UserBackend {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn StorageBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn StorageBackend>> {
        tracing::debug!(database_type = ?config.database_type, "connecting storage backend");
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::MongoDB => {
                let backend =
                    crate::backend::database::mongo::MongoBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
