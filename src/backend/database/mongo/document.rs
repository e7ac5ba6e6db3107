use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::database::PreparedUserData;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// Stored shape of a user; the id is kept as its hyphenated string form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&PreparedUserData> for UserDocument {
    fn from(data: &PreparedUserData) -> Self {
        Self {
            id: data.id.to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
        }
    }
}

impl TryFrom<Document> for UserDocument {
    type Error = AppError;

    fn try_from(document: Document) -> AppResult<Self> {
        bson::from_document(document)
            .map_err(|e| AppError::Serialization(format!("Malformed user document: {}", e)))
    }
}

/// Decode a raw stored document into a user
pub fn decode_user(document: Document) -> AppResult<User> {
    User::try_from(UserDocument::try_from(document)?)
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(document: UserDocument) -> AppResult<Self> {
        let id = Uuid::parse_str(&document.id).map_err(|e| {
            AppError::Serialization(format!("Stored id {:?} is not a UUID: {}", document.id, e))
        })?;

        Ok(User {
            id,
            name: document.name,
            email: document.email,
        })
    }
}
