use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{Snippet, SnippetDraft};

use super::{SnippetStore, StoreError};

const SNIPPET_COLUMNS: &str = "id, owner_id, title, code, language, description, tags, \
     is_bookmarked, is_starred, created_at, updated_at";

/// PostgreSQL-backed snippet store. Expects the `snippets` table from
/// `schema.sql`. Queries are checked at runtime so builds do not need a
/// live database.
pub struct PgSnippetStore {
    pool: Pool<Postgres>,
}

impl PgSnippetStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetStore for PgSnippetStore {
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Snippet>, StoreError> {
        let snippets = sqlx::query_as::<_, Snippet>(&format!(
            "SELECT {SNIPPET_COLUMNS} FROM snippets \
             WHERE owner_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(snippets)
    }

    async fn insert(&self, snippet: &Snippet) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "INSERT INTO snippets ({SNIPPET_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
        ))
        .bind(snippet.id)
        .bind(snippet.owner_id)
        .bind(&snippet.title)
        .bind(&snippet.code)
        .bind(&snippet.language)
        .bind(&snippet.description)
        .bind(&snippet.tags)
        .bind(snippet.is_bookmarked)
        .bind(snippet.is_starred)
        .bind(snippet.created_at)
        .bind(snippet.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn replace(
        &self,
        owner: Uuid,
        id: Uuid,
        draft: SnippetDraft,
    ) -> Result<Snippet, StoreError> {
        let updated = sqlx::query_as::<_, Snippet>(&format!(
            "UPDATE snippets \
             SET title = $1, code = $2, language = $3, description = $4, tags = $5, \
                 updated_at = $6 \
             WHERE id = $7 AND owner_id = $8 \
             RETURNING {SNIPPET_COLUMNS}"
        ))
        .bind(&draft.title)
        .bind(&draft.code)
        .bind(&draft.language)
        .bind(&draft.description)
        .bind(&draft.tags)
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), StoreError> {
        let deleted = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM snippets \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING id",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        deleted.map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn set_bookmarked(
        &self,
        owner: Uuid,
        id: Uuid,
        desired: Option<bool>,
    ) -> Result<Snippet, StoreError> {
        let updated = sqlx::query_as::<_, Snippet>(&format!(
            "UPDATE snippets \
             SET is_bookmarked = COALESCE($1, NOT is_bookmarked), updated_at = $2 \
             WHERE id = $3 AND owner_id = $4 \
             RETURNING {SNIPPET_COLUMNS}"
        ))
        .bind(desired)
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(StoreError::NotFound)
    }

    async fn toggle_starred(&self, owner: Uuid, id: Uuid) -> Result<Snippet, StoreError> {
        let updated = sqlx::query_as::<_, Snippet>(&format!(
            "UPDATE snippets \
             SET is_starred = NOT is_starred, updated_at = $1 \
             WHERE id = $2 AND owner_id = $3 \
             RETURNING {SNIPPET_COLUMNS}"
        ))
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(StoreError::NotFound)
    }
}
