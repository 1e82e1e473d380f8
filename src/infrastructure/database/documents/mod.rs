//! Whole-document JSON storage
//!
//! Durable backends only know how to read and write named JSON documents.
//! [`DocumentGameRepository`](super::repositories::DocumentGameRepository)
//! maps the game aggregates onto them.

mod blob_store;
mod sqlite_store;

pub use blob_store::*;
pub use sqlite_store::*;

use async_trait::async_trait;

use crate::domain::repositories::RepositoryError;

/// Named JSON document storage
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a document, `None` if it was never written
    async fn read_document(&self, name: &str) -> Result<Option<serde_json::Value>, RepositoryError>;

    /// Replace a document wholesale
    async fn write_document(&self, name: &str, body: &serde_json::Value) -> Result<(), RepositoryError>;
}
