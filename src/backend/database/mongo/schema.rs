use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::UserDocument;
use crate::error::{AppError, AppResult};

/// Create the unique indexes backing the users collection
///
/// `id` is the upsert key and `email` mirrors the SQL UNIQUE constraint.
/// Creating an index that already exists is a no-op.
pub async fn init_schema(collection: &Collection<UserDocument>) -> AppResult<()> {
    for field in ["id", "email"] {
        let mut keys = Document::new();
        keys.insert(field, 1);
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();

        collection.create_index(index).await.map_err(|e| {
            AppError::Database(format!("Failed to create unique index on {}: {}", field, e))
        })?;
    }

    tracing::debug!(collection = collection.name(), "mongodb indexes ready");
    Ok(())
}

