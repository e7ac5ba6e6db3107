//! MongoDB adapter (document store)
//!
//! Documents are stored as `{ id: "<uuid>", name, email }`. The driver adds
//! its own `_id`, which is never read back.

mod backend_impl;
mod document;
pub mod schema;
mod user_insert_impl;
mod user_read_impl;

pub use backend_impl::MongoBackend;
pub use document::UserDocument;
pub use user_insert_impl::MongoUserInserter;
pub use user_read_impl::MongoUserReader;
