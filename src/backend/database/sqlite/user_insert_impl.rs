use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::user_insert::{PreparedUserData, UserInserter};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// SQLite-specific implementation of UserInserter
pub struct SqliteUserInserter {
    pool: SqlitePool,
    table_name: String,
}

impl SqliteUserInserter {
    pub fn new(pool: SqlitePool, table_name: impl Into<String>) -> Self {
        Self {
            pool,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserInserter for SqliteUserInserter {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User> {
        let sql = format!(
            "INSERT INTO {} (id, name, email) VALUES (?1, ?2, ?3) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email",
            self.table_name
        );

        tracing::debug!(table = %self.table_name, id = %data.id, "sqlite upsert user");

        sqlx::query(&sql)
            .bind(data.id.to_string())
            .bind(&data.name)
            .bind(&data.email)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to add user: {}", e)))?;

        Ok(data.into_user())
    }
}
