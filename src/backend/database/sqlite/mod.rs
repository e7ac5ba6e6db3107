//! SQLite adapter (embedded file store)

mod backend_impl;
pub mod schema;
mod user_insert_impl;
mod user_read_impl;

pub use backend_impl::SqliteBackend;
pub use user_insert_impl::SqliteUserInserter;
pub use user_read_impl::SqliteUserReader;
