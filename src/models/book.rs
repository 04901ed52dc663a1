//! Book model, listing query and sort keys

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use super::author::Author;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    /// Not checked against `authors` on insert
    pub author_id: i64,
    pub publication_year: i32,
    pub isbn: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book {} with the title {}, published on {} has isbn: {}",
            self.book_id, self.title, self.publication_year, self.isbn
        )
    }
}

/// Book joined with its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookWithAuthor {
    #[serde(flatten)]
    pub book: Book,
    pub author: Author,
}

/// Create book form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    #[serde(default)]
    pub title: String,
    pub author_id: i64,
    pub publication_year: i32,
    #[serde(default)]
    pub isbn: String,
}

/// Column a listing is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Title,
    PublicationYear,
    Author,
}

impl SortBy {
    /// Resolve a `sort_by` parameter; unknown or missing keys sort by title
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("publication_year") => SortBy::PublicationYear,
            Some("author") => SortBy::Author,
            _ => SortBy::Title,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::PublicationYear => "publication_year",
            SortBy::Author => "author",
        }
    }

    /// SQL expression used in `ORDER BY`
    pub(crate) fn column(self) -> &'static str {
        match self {
            SortBy::Title => "b.title",
            SortBy::PublicationYear => "b.publication_year",
            SortBy::Author => "a.name",
        }
    }
}

/// Listing query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

impl ListingQuery {
    /// Search string, empty when no filter applies
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    pub fn sort_by(&self) -> SortBy {
        SortBy::from_param(self.sort_by.as_deref())
    }
}

/// Result of a listing query
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub books: Vec<BookWithAuthor>,
    pub sort_by: SortBy,
    pub search: String,
}
