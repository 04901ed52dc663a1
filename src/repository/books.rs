//! Books repository

use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookWithAuthor, CreateBook, SortBy},
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List books joined with their author, optionally filtered on title.
    ///
    /// Books pointing at a missing author are left out by the inner join.
    /// An empty `search` matches every title.
    pub async fn list(&self, search: &str, sort_by: SortBy) -> AppResult<Vec<BookWithAuthor>> {
        let query = format!(
            r#"
            SELECT b.book_id, b.title, b.author_id, b.publication_year, b.isbn,
                   a.name AS author_name, a.birth_date AS author_birth_date,
                   a.death_date AS author_death_date
            FROM books b
            JOIN authors a ON a.author_id = b.author_id
            WHERE ?1 = '' OR instr(lower(b.title), lower(?1)) > 0
            ORDER BY {}, b.book_id
            "#,
            sort_by.column()
        );

        let rows = sqlx::query(&query)
            .bind(search)
            .fetch_all(&self.pool)
            .await?;

        let books: Vec<BookWithAuthor> = rows
            .iter()
            .map(book_with_author)
            .collect::<Result<_, sqlx::Error>>()?;
        Ok(books)
    }

    /// Insert a book; `author_id` is stored as given
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, publication_year, isbn)
            VALUES (?, ?, ?, ?)
            RETURNING book_id, title, author_id, publication_year, isbn
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(data.publication_year)
        .bind(&data.isbn)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a book and return what was removed
    pub async fn delete(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            DELETE FROM books WHERE book_id = ?
            RETURNING book_id, title, author_id, publication_year, isbn
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }
}

/// Rows written by other tools may hold values of the wrong type; those
/// surface as decode errors rather than panics.
fn book_with_author(r: &SqliteRow) -> Result<BookWithAuthor, sqlx::Error> {
    Ok(BookWithAuthor {
        book: Book {
            book_id: r.try_get("book_id")?,
            title: r.try_get("title")?,
            author_id: r.try_get("author_id")?,
            publication_year: r.try_get("publication_year")?,
            isbn: r.try_get("isbn")?,
        },
        author: Author {
            author_id: r.try_get("author_id")?,
            name: r.try_get("author_name")?,
            birth_date: r.try_get("author_birth_date")?,
            death_date: r.try_get("author_death_date")?,
        },
    })
}
