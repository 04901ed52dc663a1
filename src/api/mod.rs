//! HTTP handlers and routing

pub mod authors;
pub mod books;
pub mod flash;
pub mod health;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::AppState;

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(books::home))
        .route(
            "/add_author",
            get(authors::add_author_form).post(authors::add_author),
        )
        .route("/add_book", get(books::add_book_form).post(books::add_book))
        .route("/book/:id/delete", post(books::delete_book))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
