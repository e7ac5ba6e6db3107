//! PostgreSQL adapter (client-server relational store)

mod backend_impl;
pub mod schema;
mod user_insert_impl;
mod user_read_impl;

pub use backend_impl::PostgresBackend;
pub use user_insert_impl::PostgresUserInserter;
pub use user_read_impl::PostgresUserReader;
