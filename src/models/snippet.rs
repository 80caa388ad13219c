use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved code sample owned by exactly one user.
///
/// `owner_id` is fixed at creation; every store operation filters by it, so
/// a snippet never leaks across accounts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub code: String,
    pub language: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub is_bookmarked: bool,
    pub is_starred: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a snippet, as supplied by create and update
/// requests. Update is a full replace: absent description/tags arrive here
/// already collapsed to `None`/empty.
#[derive(Debug, Clone)]
pub struct SnippetDraft {
    pub title: String,
    pub code: String,
    pub language: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl Snippet {
    pub fn new(owner_id: Uuid, draft: SnippetDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: draft.title,
            code: draft.code,
            language: draft.language,
            description: draft.description,
            tags: draft.tags,
            is_bookmarked: false,
            is_starred: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite all mutable fields and refresh `updated_at`.
    pub fn apply(&mut self, draft: SnippetDraft) {
        self.title = draft.title;
        self.code = draft.code;
        self.language = draft.language;
        self.description = draft.description;
        self.tags = draft.tags;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SnippetDraft {
        SnippetDraft {
            title: "hello".into(),
            code: "fn main() {}".into(),
            language: "rust".into(),
            description: Some("greeting".into()),
            tags: vec!["demo".into()],
        }
    }

    #[test]
    fn new_snippet_defaults() {
        let owner = Uuid::new_v4();
        let snippet = Snippet::new(owner, draft());

        assert_eq!(snippet.owner_id, owner);
        assert!(!snippet.is_bookmarked);
        assert!(!snippet.is_starred);
        assert_eq!(snippet.created_at, snippet.updated_at);
    }

    #[test]
    fn apply_replaces_every_mutable_field() {
        let mut snippet = Snippet::new(Uuid::new_v4(), draft());
        let before = snippet.updated_at;

        snippet.apply(SnippetDraft {
            title: "renamed".into(),
            code: "print('hi')".into(),
            language: "python".into(),
            description: None,
            tags: vec![],
        });

        assert_eq!(snippet.title, "renamed");
        assert_eq!(snippet.description, None);
        assert!(snippet.tags.is_empty());
        assert!(snippet.updated_at >= before);
    }

    #[test]
    fn serializes_camel_case() {
        let snippet = Snippet::new(Uuid::new_v4(), draft());
        let value = serde_json::to_value(&snippet).unwrap();

        assert!(value.get("ownerId").is_some());
        assert_eq!(value["isBookmarked"], false);
        assert_eq!(value["isStarred"], false);
        assert!(value.get("createdAt").is_some());
    }
}
