use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Initialize the users table for PostgreSQL
///
/// Ids are generated by the application, so the column has no default.
pub async fn init_schema(pool: &PgPool, table_name: &str) -> AppResult<()> {
    let users_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
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

    tracing::debug!(table = table_name, "postgres schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drop_schema(pool: &PgPool, table_name: &str) {
        sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", table_name))
            .execute(pool)
            .await
            .unwrap();
    }
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn test_schema_creation() {
        // This test requires a running PostgreSQL instance
        // Skip if DATABASE_URL is not set
        let Ok(url) = std::env::var("DATABASE_URL") else {
            return;
        };

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .unwrap();

        init_schema(&pool, "schema_test_users").await.unwrap();
        init_schema(&pool, "schema_test_users").await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM schema_test_users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);

        drop_schema(&pool, "schema_test_users").await;
    }
}
