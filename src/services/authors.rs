//! Authors service

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Create an author without validating names or dates
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        let author = self.repository.authors.create(data).await?;
        tracing::info!(author_id = author.author_id, "Created author '{}'", author.name);
        Ok(author)
    }
}
