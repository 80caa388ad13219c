use std::sync::Arc;

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;

use store::SnippetStore;

pub struct AppState {
    pub store: Arc<dyn SnippetStore>,
}
