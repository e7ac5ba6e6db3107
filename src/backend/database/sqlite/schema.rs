use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Initialize the users table for SQLite
///
/// Ids are stored as TEXT; email carries a UNIQUE constraint.
pub async fn init_schema(pool: &SqlitePool, table_name: &str) -> AppResult<()> {
    let users_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
        "#,
        table_name
    );

    sqlx::query(&users_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

    tracing::debug!(table = table_name, "sqlite schema ready");
    Ok(())
}
