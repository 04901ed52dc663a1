//! Author creation endpoints

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::{cookie::SignedCookieJar, WithRejection};

use crate::{
    error::{AppError, AppResult},
    models::author::CreateAuthor,
    views::{Page, ADD_AUTHOR},
    AppState,
};

use super::flash::{self, Flash};

pub async fn add_author_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let (jar, flashes) = flash::take(jar);
    let html = state.views.render(
        ADD_AUTHOR,
        &Page {
            title: "Add author",
            flashes: &flashes,
            data: (),
        },
    )?;
    Ok((jar, html))
}

/// Create an author and return to the form for the next entry
pub async fn add_author(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    WithRejection(Form(data), _): WithRejection<Form<CreateAuthor>, AppError>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let author = state.services.authors.create(&data).await?;
    let jar = flash::push(
        jar,
        Flash::success(format!("Author '{}' added successfully!", author.name)),
    );
    Ok((jar, Redirect::to("/add_author")))
}
