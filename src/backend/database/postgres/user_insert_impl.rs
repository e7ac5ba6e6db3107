use async_trait::async_trait;
use sqlx::PgPool;

use super::super::user_insert::{PreparedUserData, UserInserter};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// PostgreSQL-specific implementation of UserInserter
pub struct PostgresUserInserter {
    pool: PgPool,
    table_name: String,
}

impl PostgresUserInserter {
    pub fn new(pool: PgPool, table_name: impl Into<String>) -> Self {
        Self {
            pool,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserInserter for PostgresUserInserter {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User> {
        let sql = format!(
            "INSERT INTO {} (id, name, email) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email",
            self.table_name
        );

        tracing::debug!(table = %self.table_name, id = %data.id, "postgres upsert user");

        sqlx::query(&sql)
            .bind(data.id)
            .bind(&data.name)
            .bind(&data.email)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to execute insert user query: {}", e)))?;

        Ok(data.into_user())
    }
}
