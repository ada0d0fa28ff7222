use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    Router::new()
        // Books
        .route("/books", get(handlers::list_books))
        .route(
            "/books",
            post(handlers::create_book).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/books/:id", delete(handlers::delete_book))
        // Uploaded cover images
        .route("/uploads/:filename", get(handlers::serve_upload))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
