use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::super::config::DatabaseBackendConfig;
use super::{PostgresUserInserter, PostgresUserReader};
use crate::backend::database::{UnifiedUserInsertOps, UnifiedUserReadOps};
use crate::backend::{Backend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// PostgreSQL storage backend
pub struct PostgresBackend {
    pool: PgPool,
    table_name: String,
    user_insert_ops: UnifiedUserInsertOps<PostgresUserInserter>,
    user_read_ops: UnifiedUserReadOps<PostgresUserReader>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool, config: &DatabaseBackendConfig) -> Self {
        let user_inserter = PostgresUserInserter::new(pool.clone(), config.table_name.clone());
        let user_reader = PostgresUserReader::new(pool.clone(), config.table_name.clone());

        Self {
            pool,
            table_name: config.table_name.clone(),
            user_insert_ops: UnifiedUserInsertOps::new(user_inserter, config.operation_timeout()),
            user_read_ops: UnifiedUserReadOps::new(user_reader, config.operation_timeout()),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn user_insert_ops(&self) -> &UnifiedUserInsertOps<PostgresUserInserter> {
        &self.user_insert_ops
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout())
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        tracing::info!(table = %config.table_name, "connected to PostgreSQL");
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
impl UserBackend for PostgresBackend {
    async fn add_user(&self, user: &User) -> AppResult<User> {
        self.user_insert_ops.create_user(user).await
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_read_ops.find_all_users().await
    }
}
