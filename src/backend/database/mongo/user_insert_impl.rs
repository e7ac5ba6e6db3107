use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;

use super::UserDocument;
use crate::backend::database::{PreparedUserData, UserInserter};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// MongoDB-specific implementation of UserInserter
///
/// A single `replace_one` with `upsert` keyed on `id` gives the same
/// collision semantics as the SQL `ON CONFLICT (id)` statements.
pub struct MongoUserInserter {
    collection: Collection<UserDocument>,
}

impl MongoUserInserter {
    pub fn new(collection: Collection<UserDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserInserter for MongoUserInserter {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User> {
        let document = UserDocument::from(&data);
        tracing::debug!(collection = self.collection.name(), id = %data.id, "mongodb upsert user");

        self.collection
            .replace_one(doc! { "id": document.id.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(|e| AppError::Database(format!("Failed to add user: {}", e)))?;

        Ok(data.into_user())
    }
}
