//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the storage port defined in `hbnb-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for the port trait) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod object_store;
mod pool;

pub use error::StorageError;
pub use object_store::SqliteStorage;
pub use pool::{Config, Database};
