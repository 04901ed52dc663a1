//! Data models for the library catalog

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, CreateAuthor};
pub use book::{Book, BookWithAuthor, CreateBook, Listing, ListingQuery, SortBy};
