//! User read operations
//!
//! This module provides common interfaces for user read operations
//! that work across different storage backends.

use async_trait::async_trait;
use std::time::Duration;

use super::deadline::with_deadline;
use crate::error::AppResult;
use crate::models::User;

/// Trait for user read operations
///
/// Implementations either return every stored row/document or an error;
/// a fault part-way through iteration discards what was read so far.
#[async_trait]
pub trait UserReader: Send + Sync {
    /// Find all users
    async fn find_all_users(&self) -> AppResult<Vec<User>>;
}

/// Unified user read operations
pub struct UnifiedUserReadOps<T: UserReader> {
    reader: T,
    timeout: Duration,
}

impl<T: UserReader> UnifiedUserReadOps<T> {
    pub fn new(reader: T, timeout: Duration) -> Self {
        Self { reader, timeout }
    }

    /// Find all users
    pub async fn find_all_users(&self) -> AppResult<Vec<User>> {
        with_deadline("get all users", self.timeout, self.reader.find_all_users()).await
    }
}
