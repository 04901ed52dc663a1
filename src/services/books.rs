//! Books service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, Listing, ListingQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search and sort the catalog
    pub async fn listing(&self, query: &ListingQuery) -> AppResult<Listing> {
        let search = query.search();
        let sort_by = query.sort_by();
        let books = self.repository.books.list(search, sort_by).await?;
        tracing::debug!(
            search,
            sort_by = sort_by.as_str(),
            count = books.len(),
            "Listed books"
        );
        Ok(Listing {
            books,
            sort_by,
            search: search.to_string(),
        })
    }

    /// Create a book; the author reference is not checked
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(data).await?;
        tracing::info!(
            book_id = book.book_id,
            author_id = book.author_id,
            "Created book '{}'",
            book.title
        );
        Ok(book)
    }

    /// Delete a book, failing with `NotFound` when it does not exist
    pub async fn delete(&self, id: i64) -> AppResult<Book> {
        let book = self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Deleted book '{}'", book.title);
        Ok(book)
    }
}
