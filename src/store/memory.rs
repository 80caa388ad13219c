use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{Snippet, SnippetDraft};

use super::{SnippetStore, StoreError};

/// In-memory snippet store used as the injected test double.
///
/// Rows are kept in insertion order; since snippets are created with
/// strictly increasing `created_at` values, listing in reverse insertion
/// order matches the production `ORDER BY created_at DESC`.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Snippet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_owned(
        &self,
        owner: Uuid,
        id: Uuid,
        mutate: impl FnOnce(&mut Snippet),
    ) -> Result<Snippet, StoreError> {
        let mut rows = self.rows.lock().expect("snippet store lock poisoned");
        let row = rows
            .iter_mut()
            .find(|s| s.id == id && s.owner_id == owner)
            .ok_or(StoreError::NotFound)?;
        mutate(row);
        Ok(row.clone())
    }
}

#[async_trait]
impl SnippetStore for MemoryStore {
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Snippet>, StoreError> {
        let rows = self.rows.lock().expect("snippet store lock poisoned");
        Ok(rows
            .iter()
            .rev()
            .filter(|s| s.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn insert(&self, snippet: &Snippet) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().expect("snippet store lock poisoned");
        rows.push(snippet.clone());
        Ok(())
    }

    async fn replace(
        &self,
        owner: Uuid,
        id: Uuid,
        draft: SnippetDraft,
    ) -> Result<Snippet, StoreError> {
        self.with_owned(owner, id, |row| row.apply(draft))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().expect("snippet store lock poisoned");
        let before = rows.len();
        rows.retain(|s| !(s.id == id && s.owner_id == owner));
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn set_bookmarked(
        &self,
        owner: Uuid,
        id: Uuid,
        desired: Option<bool>,
    ) -> Result<Snippet, StoreError> {
        self.with_owned(owner, id, |row| {
            row.is_bookmarked = desired.unwrap_or(!row.is_bookmarked);
            row.updated_at = Utc::now();
        })
    }

    async fn toggle_starred(&self, owner: Uuid, id: Uuid) -> Result<Snippet, StoreError> {
        self.with_owned(owner, id, |row| {
            row.is_starred = !row.is_starred;
            row.updated_at = Utc::now();
        })
    }
}
