//! Page handlers. Each renders a static page for the shared site record.

use axum::{extract::State, http::Uri, response::Html};

use crate::api::AppState;
use crate::errors::AppError;
use crate::pages as views;

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(views::home::render(&state.site))
}

pub async fn login(State(state): State<AppState>) -> Html<String> {
    Html(views::login::render(&state.site))
}

pub async fn signup(State(state): State<AppState>) -> Html<String> {
    Html(views::signup::render(&state.site))
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    Html(views::dashboard::render(&state.site))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No page for path");
    AppError::NotFound
}
