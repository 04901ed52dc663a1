//! Library Catalog
//!
//! A small web application for browsing, searching, adding and deleting
//! books and their authors, backed by a SQLite database.

use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use sqlx::{Pool, Sqlite};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub views: Arc<views::Views>,
    pub cookie_key: Key,
}

impl AppState {
    /// Wire services, templates and the cookie key around an open pool
    pub fn new(config: AppConfig, pool: Pool<Sqlite>) -> AppResult<Self> {
        let repository = repository::Repository::new(pool);
        // Key::from needs 64 bytes, which is exactly one SHA-512 digest
        let digest = Sha512::digest(config.session.secret_key.as_bytes());
        Ok(Self {
            cookie_key: Key::from(digest.as_slice()),
            services: Arc::new(services::Services::new(repository)),
            views: Arc::new(views::Views::new()?),
            config: Arc::new(config),
        })
    }
}
