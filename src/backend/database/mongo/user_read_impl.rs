use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use super::document::decode_user;
use crate::backend::database::UserReader;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// MongoDB-specific implementation of UserReader
///
/// Reads raw documents and decodes them itself; a malformed document is a
/// serialization error.
pub struct MongoUserReader {
    collection: Collection<Document>,
}

impl MongoUserReader {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserReader for MongoUserReader {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        tracing::debug!(collection = self.collection.name(), "mongodb find all users");

        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(format!("Failed to query all users: {}", e)))?;

        let mut users = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(format!("Failed to read user document: {}", e)))?
        {
            users.push(decode_user(document)?);
        }

        Ok(users)
    }
}
