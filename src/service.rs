//! Application-facing user operations
//!
//! `UserService` is what calling code depends on. It delegates to whichever
//! storage backend it was built with, adding the operation name to any
//! failure, so backends can be swapped without touching callers.

use std::sync::Arc;
use std::time::Instant;

use crate::backend::UserBackend;
use crate::error::AppResult;
use crate::logging::log_operation;
use crate::models::User;
use crate::validation::validate_user;

pub struct UserService<B: ?Sized = dyn UserBackend> {
    backend: Arc<B>,
    validate: bool,
}

impl<B: UserBackend + ?Sized> UserService<B> {
    /// Create a pass-through service over the given backend
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            validate: false,
        }
    }

    /// Check each user with [`validate_user`] before it reaches the backend
    pub fn with_validation(mut self) -> Self {
        self.validate = true;
        self
    }

    /// Add a user; the backend assigns its id
    pub async fn add_user(&self, user: &User) -> AppResult<User> {
        let started = Instant::now();
        if self.validate {
            if let Err(e) = validate_user(user) {
                let outcome = Err(e);
                log_operation("add user", started, &outcome);
                return outcome;
            }
        }

        let outcome = self
            .backend
            .add_user(user)
            .await
            .map_err(|e| e.in_operation("add user"));
        log_operation("add user", started, &outcome);
        outcome
    }

    /// List every stored user
    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        let started = Instant::now();
        let outcome = self
            .backend
            .get_all_users()
            .await
            .map_err(|e| e.in_operation("get all users"));
        log_operation("get all users", started, &outcome);
        outcome
    }
}

impl<B: ?Sized> Clone for UserService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            validate: self.validate,
        }
    }
}
