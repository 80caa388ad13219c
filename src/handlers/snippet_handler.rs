use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Snippet, SnippetDraft, UserData};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSnippetRequest {
    pub title: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateSnippetRequest {
    fn into_draft(self) -> Result<SnippetDraft, ApiError> {
        Ok(SnippetDraft {
            title: required(self.title, "title")?,
            code: required(self.code, "code")?,
            language: required(self.language, "language")?,
            description: self.description,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("{field} is required"))),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateSnippetRequest {
    pub title: String,
    pub code: String,
    pub language: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateSnippetRequest {
    // Full replace: omitted description/tags clear the stored values.
    fn into_draft(self) -> SnippetDraft {
        SnippetDraft {
            title: self.title,
            code: self.code,
            language: self.language,
            description: self.description,
            tags: self.tags.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    pub is_bookmarked: Option<bool>,
}

#[get("")]
pub async fn list_snippets(
    app_data: web::Data<AppState>,
    user_data: web::ReqData<UserData>,
) -> Result<impl Responder, ApiError> {
    let snippets = app_data.store.list_for_owner(user_data.id).await?;
    Ok(HttpResponse::Ok().json(snippets))
}

#[post("")]
pub async fn create_snippet(
    app_data: web::Data<AppState>,
    data_json: web::Json<CreateSnippetRequest>,
    user_data: web::ReqData<UserData>,
) -> Result<impl Responder, ApiError> {
    let draft = data_json.into_inner().into_draft()?;
    let snippet = Snippet::new(user_data.id, draft);
    app_data.store.insert(&snippet).await?;

    Ok(HttpResponse::Created().json(snippet))
}

#[put("/{snippetId}")]
pub async fn update_snippet(
    app_data: web::Data<AppState>,
    path: web::Path<Uuid>,
    data_json: web::Json<UpdateSnippetRequest>,
    user_data: web::ReqData<UserData>,
) -> Result<impl Responder, ApiError> {
    let snippet_id = path.into_inner();
    let snippet = app_data
        .store
        .replace(user_data.id, snippet_id, data_json.into_inner().into_draft())
        .await?;

    Ok(HttpResponse::Ok().json(snippet))
}

#[delete("/{snippetId}")]
pub async fn delete_snippet(
    app_data: web::Data<AppState>,
    path: web::Path<Uuid>,
    user_data: web::ReqData<UserData>,
) -> Result<impl Responder, ApiError> {
    let snippet_id = path.into_inner();
    app_data.store.delete(user_data.id, snippet_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Snippet deleted successfully"
    })))
}

#[patch("/{snippetId}/bookmark")]
pub async fn bookmark_snippet(
    app_data: web::Data<AppState>,
    path: web::Path<Uuid>,
    data_json: Option<web::Json<BookmarkRequest>>,
    user_data: web::ReqData<UserData>,
) -> Result<impl Responder, ApiError> {
    let snippet_id = path.into_inner();
    // No body (or no isBookmarked field) means flip the current value.
    let desired = data_json.and_then(|b| b.into_inner().is_bookmarked);
    let snippet = app_data
        .store
        .set_bookmarked(user_data.id, snippet_id, desired)
        .await?;

    Ok(HttpResponse::Ok().json(snippet))
}

#[patch("/{snippetId}/star")]
pub async fn star_snippet(
    app_data: web::Data<AppState>,
    path: web::Path<Uuid>,
    user_data: web::ReqData<UserData>,
) -> Result<impl Responder, ApiError> {
    let snippet_id = path.into_inner();
    let snippet = app_data.store.toggle_starred(user_data.id, snippet_id).await?;

    Ok(HttpResponse::Ok().json(snippet))
}
