//! Book listing, creation and deletion endpoints

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::{cookie::SignedCookieJar, WithRejection};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, book::{CreateBook, ListingQuery}},
    views::{Page, ADD_BOOK, HOME},
    AppState,
};

use super::flash::{self, Flash};

#[derive(Serialize)]
struct AddBookData {
    authors: Vec<Author>,
}

/// Listing with optional title search and sort key
pub async fn home(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(query): Query<ListingQuery>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let listing = state.services.books.listing(&query).await?;
    let (jar, flashes) = flash::take(jar);
    let html = state.views.render(
        HOME,
        &Page {
            title: "Books",
            flashes: &flashes,
            data: &listing,
        },
    )?;
    Ok((jar, html))
}

/// Book creation form with author choices
pub async fn add_book_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let authors = state.services.authors.list().await?;
    let (jar, flashes) = flash::take(jar);
    let html = state.views.render(
        ADD_BOOK,
        &Page {
            title: "Add book",
            flashes: &flashes,
            data: AddBookData { authors },
        },
    )?;
    Ok((jar, html))
}

/// Create a book and return to the form
pub async fn add_book(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    WithRejection(Form(data), _): WithRejection<Form<CreateBook>, AppError>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let book = state.services.books.create(&data).await?;
    let jar = flash::push(
        jar,
        Flash::success(format!("title {} added successfully", book.title)),
    );
    Ok((jar, Redirect::to("/add_book")))
}

/// Delete a book; a missing book is reported as a notice, not a failure
pub async fn delete_book(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let notice = match state.services.books.delete(id).await {
        Ok(book) => Flash::success(format!("Book '{}' deleted successfully", book.title)),
        Err(AppError::NotFound(_)) => Flash::error("Book not found."),
        Err(e) => return Err(e),
    };
    Ok((flash::push(jar, notice), Redirect::to("/")))
}
