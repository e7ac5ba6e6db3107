//! User storage behind a swappable backend
//!
//! [`UserService`] is the entry point for application code. It talks to a
//! [`backend::UserBackend`], implemented here for SQLite, PostgreSQL and
//! MongoDB; [`backend::BackendFactory`] picks one from configuration.

pub mod backend;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod service;
pub mod startup;
pub mod validation;

// Re-export commonly used types for easier access
pub use error::{AppError, AppResult, ErrorKind};
pub use models::User;
pub use service::UserService;
