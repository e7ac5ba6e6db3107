//! Storage adapters for the user port
//!
//! Shared logic (id generation, deadlines) lives next to the adapter traits;
//! each backend module only supplies the statements or driver calls.
//!
//! # Architecture
//!
//! ```text
//! Common logic (user_insert.rs, user_read.rs, deadline.rs)
//!     ↓
//! Backend-specific implementations
//!     ├── sqlite/   (embedded file store)
//!     ├── postgres/ (client-server relational store)
//!     └── mongo/    (document store)
//! ```

pub mod config;
pub mod deadline;
pub mod mongo;
pub mod postgres;
pub mod sqlite;
pub mod user_insert;
pub mod user_read;

pub use config::DatabaseBackendConfig;

pub use user_insert::{PreparedUserData, UnifiedUserInsertOps, UserInsertProcessor, UserInserter};

pub use user_read::{UnifiedUserReadOps, UserReader};

pub use mongo::{MongoBackend, MongoUserInserter, MongoUserReader};
pub use postgres::{PostgresBackend, PostgresUserInserter, PostgresUserReader};
pub use sqlite::{SqliteBackend, SqliteUserInserter, SqliteUserReader};
