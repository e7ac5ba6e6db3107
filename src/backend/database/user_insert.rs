use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

use super::deadline::with_deadline;
use crate::error::AppResult;
use crate::models::User;

/// User data ready for a single upsert statement or driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedUserData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl PreparedUserData {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Backend-specific adapter for user INSERT operations
///
/// Implementations write the prepared record in one atomic operation and
/// replace name and email when a record with the same id already exists.
#[async_trait]
pub trait UserInserter: Send + Sync {
    /// Execute the upsert and return the stored user
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User>;
}

/// Shared logic for user INSERT operations
pub struct UserInsertProcessor;

impl UserInsertProcessor {
    /// Prepare user data for insertion
    ///
    /// The id is always generated here; whatever the caller put in
    /// `user.id` is discarded.
    pub fn prepare_user_for_insert(user: &User) -> PreparedUserData {
        PreparedUserData {
            id: Uuid::new_v4(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Unified user INSERT operations using the adapter pattern
pub struct UnifiedUserInsertOps<T: UserInserter> {
    inserter: T,
    timeout: Duration,
}

impl<T: UserInserter> UnifiedUserInsertOps<T> {
    pub fn new(inserter: T, timeout: Duration) -> Self {
        Self { inserter, timeout }
    }

    /// Create a new user under a fresh id
    pub async fn create_user(&self, user: &User) -> AppResult<User> {
        let prepared_data = UserInsertProcessor::prepare_user_for_insert(user);
        self.insert_prepared(prepared_data).await
    }

    /// Upsert already-prepared data, keeping its id
    pub async fn insert_prepared(&self, data: PreparedUserData) -> AppResult<User> {
        with_deadline(
            "add user",
            self.timeout,
            self.inserter.execute_user_insert(data),
        )
        .await
    }
}
