use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::super::user_read::UserReader;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// PostgreSQL-specific implementation of UserReader
pub struct PostgresUserReader {
    pool: PgPool,
    table_name: String,
}

impl PostgresUserReader {
    pub fn new(pool: PgPool, table_name: impl Into<String>) -> Self {
        Self {
            pool,
            table_name: table_name.into(),
        }
    }

    fn row_to_user(row: &PgRow) -> AppResult<User> {
        let decode = |e: sqlx::Error| AppError::Serialization(format!("Failed to scan user row: {}", e));

        Ok(User {
            id: row.try_get("id").map_err(decode)?,
            name: row.try_get("name").map_err(decode)?,
            email: row.try_get("email").map_err(decode)?,
        })
    }
}

#[async_trait]
impl UserReader for PostgresUserReader {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        let sql = format!("SELECT id, name, email FROM {}", self.table_name);
        tracing::debug!(table = %self.table_name, "postgres select all users");

        let mut rows = sqlx::query(&sql).fetch(&self.pool);
        let mut users = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(|e| {
            AppError::Database(format!("Failed to execute select all users query: {}", e))
        })? {
            users.push(Self::row_to_user(&row)?);
        }

        Ok(users)
    }
}
