//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, pages};
use super::AppState;
use crate::pages::{dashboard, home, login, signup};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route(home::PATH, get(pages::home))
        .route(login::PATH, get(pages::login))
        .route(signup::PATH, get(pages::signup))
        .route(dashboard::PATH, get(pages::dashboard))
        // Health check
        .route("/health", get(health::health))
        .fallback(pages::not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
