use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::super::user_read::UserReader;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// SQLite-specific implementation of UserReader
pub struct SqliteUserReader {
    pool: SqlitePool,
    table_name: String,
}

impl SqliteUserReader {
    pub fn new(pool: SqlitePool, table_name: impl Into<String>) -> Self {
        Self {
            pool,
            table_name: table_name.into(),
        }
    }

    /// Convert a row into a User; ids are stored as TEXT
    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        let id: String = row
            .try_get("id")
            .map_err(|e| AppError::Serialization(format!("Failed to read user id: {}", e)))?;
        let id = Uuid::parse_str(&id)
            .map_err(|e| AppError::Serialization(format!("Stored id {:?} is not a UUID: {}", id, e)))?;

        Ok(User {
            id,
            name: row
                .try_get("name")
                .map_err(|e| AppError::Serialization(format!("Failed to read user name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| AppError::Serialization(format!("Failed to read user email: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserReader for SqliteUserReader {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        let sql = format!("SELECT id, name, email FROM {}", self.table_name);
        tracing::debug!(table = %self.table_name, "sqlite select all users");

        let mut rows = sqlx::query(&sql).fetch(&self.pool);
        let mut users = Vec::new();
        while let Some(row) = rows
            .try_next()
            .await
            .map_err(|e| AppError::Database(format!("Failed to query all users: {}", e)))?
        {
            users.push(Self::row_to_user(&row)?);
        }

        Ok(users)
    }
}
