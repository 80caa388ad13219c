use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Snippet, SnippetDraft};

pub mod postgres;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the id *and* the caller's owner id. Deliberately does
    /// not distinguish "does not exist" from "owned by someone else".
    #[error("record not found")]
    NotFound,

    #[error("storage backend failure: {0}")]
    Backend(#[from] sqlx::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFoundOrForbidden,
            StoreError::Backend(cause) => {
                log::error!("storage failure: {cause}");
                ApiError::Storage
            }
        }
    }
}

/// Owner-scoped persistence operations over snippets.
///
/// Every method takes the caller's resolved identity and only ever touches
/// rows whose `owner_id` matches it. The production implementation is
/// [`postgres::PgSnippetStore`]; an in-memory variant backs the tests.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// All snippets for the owner, newest-created first.
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Snippet>, StoreError>;

    /// Persist a freshly constructed snippet.
    async fn insert(&self, snippet: &Snippet) -> Result<(), StoreError>;

    /// Full replace of the mutable fields, refreshing `updated_at`.
    async fn replace(
        &self,
        owner: Uuid,
        id: Uuid,
        draft: SnippetDraft,
    ) -> Result<Snippet, StoreError>;

    /// Permanently remove the snippet.
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError>;

    /// Set the bookmark flag to `desired`, or flip it when `None`.
    async fn set_bookmarked(
        &self,
        owner: Uuid,
        id: Uuid,
        desired: Option<bool>,
    ) -> Result<Snippet, StoreError>;

    /// Flip the star flag.
    async fn toggle_starred(&self, owner: Uuid, id: Uuid) -> Result<Snippet, StoreError>;
}
