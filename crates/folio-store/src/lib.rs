//! # folio-store
//!
//! Document store adapters and the content repository for Folio.
//!
//! The repository reads through the [`DocumentStore`] trait and never owns a
//! global client: callers build a store (in-memory for tests and previews,
//! libSQL for the site) and hand it to [`ContentRepository::new`].
//!
//! Uses the `libsql` crate (v0.9.29) for local files, `:memory:` databases,
//! and remote Turso/libSQL URLs.

pub mod error;
pub mod libsql_store;
pub mod memory;
mod migrations;
pub mod outcome;
pub mod repository;
pub mod store;
mod test_support;

pub use error::StoreError;
pub use libsql_store::LibsqlStore;
pub use memory::MemoryStore;
pub use outcome::{ListOutcome, Resume};
pub use repository::ContentRepository;
pub use store::DocumentStore;
