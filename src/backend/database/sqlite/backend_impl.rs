use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use super::super::config::DatabaseBackendConfig;
use super::{SqliteUserInserter, SqliteUserReader};
use crate::backend::database::{UnifiedUserInsertOps, UnifiedUserReadOps};
use crate::backend::{Backend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// SQLite storage backend
///
/// In-memory databases live only as long as their connection, so the pool
/// keeps exactly one connection open for them.
pub struct SqliteBackend {
    pool: SqlitePool,
    table_name: String,
    user_insert_ops: UnifiedUserInsertOps<SqliteUserInserter>,
    user_read_ops: UnifiedUserReadOps<SqliteUserReader>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool, config: &DatabaseBackendConfig) -> Self {
        let user_inserter = SqliteUserInserter::new(pool.clone(), config.table_name.clone());
        let user_reader = SqliteUserReader::new(pool.clone(), config.table_name.clone());

        Self {
            pool,
            table_name: config.table_name.clone(),
            user_insert_ops: UnifiedUserInsertOps::new(user_inserter, config.operation_timeout()),
            user_read_ops: UnifiedUserReadOps::new(user_reader, config.operation_timeout()),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn user_insert_ops(&self) -> &UnifiedUserInsertOps<SqliteUserInserter> {
        &self.user_insert_ops
    }

    fn connect_options(config: &DatabaseBackendConfig) -> AppResult<SqliteConnectOptions> {
        let url = if config.is_memory_database() {
            "sqlite::memory:"
        } else {
            config.connection_url.as_str()
        };

        let options = SqliteConnectOptions::from_str(url).map_err(|e| {
            AppError::Configuration(format!("Invalid SQLite URL {}: {}", config.connection_url, e))
        })?;

        Ok(options.create_if_missing(true))
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let options = Self::connect_options(config)?;
        let pool_options = if config.is_memory_database() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .acquire_timeout(config.connection_timeout())
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        tracing::info!(url = %config.connection_url, table = %config.table_name, "connected to SQLite");
        Ok(Self::new(pool, config))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool, &self.table_name).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl UserBackend for SqliteBackend {
    async fn add_user(&self, user: &User) -> AppResult<User> {
        self.user_insert_ops.create_user(user).await
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_read_ops.find_all_users().await
    }
}
