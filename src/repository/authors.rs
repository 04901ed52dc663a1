//! Authors repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all authors in insertion order
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT author_id, name, birth_date, death_date FROM authors ORDER BY author_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, birth_date, death_date)
            VALUES (?, ?, ?)
            RETURNING author_id, name, birth_date, death_date
            "#,
        )
        .bind(&data.name)
        .bind(&data.birth_date)
        .bind(&data.death_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
