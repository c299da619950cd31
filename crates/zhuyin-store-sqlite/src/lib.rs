//! SQLite backend for the user-phrase store.
//!
//! Wraps [`tokio_rusqlite`] so database work runs on the connection's own
//! thread; the importer drives it one call at a time.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
