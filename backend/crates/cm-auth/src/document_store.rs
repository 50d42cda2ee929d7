use crate::Result as AuthErrorResult;

use async_trait::async_trait;
use serde_json::Value;

/// How `put` treats an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the whole document
    Replace,
    /// Shallow merge: top-level keys in the new document win, others are kept
    Merge,
}

/// A document returned by [`DocumentStore::query`] together with its key.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Value,
}

/// External document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> AuthErrorResult<Option<Value>>;

    async fn put(
        &self,
        collection: &str,
        id: &str,
        document: Value,
        mode: WriteMode,
    ) -> AuthErrorResult<()>;

    async fn query(&self, collection: &str) -> AuthErrorResult<Vec<StoredDocument>>;
}
