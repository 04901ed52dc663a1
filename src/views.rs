//! HTML rendering with embedded Handlebars templates

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::{api::flash::Flash, error::AppResult};

pub const HOME: &str = "home";
pub const ADD_AUTHOR: &str = "add_author";
pub const ADD_BOOK: &str = "add_book";

const LAYOUT: &str = include_str!("../templates/layout.hbs");

/// Data handed to a page template
#[derive(Serialize)]
pub struct Page<'a, T: Serialize> {
    pub title: &'a str,
    pub flashes: &'a [Flash],
    pub data: T,
}

/// Template registry shared by all handlers
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_partial("layout", LAYOUT)?;
        registry.register_template_string(HOME, include_str!("../templates/home.hbs"))?;
        registry.register_template_string(ADD_AUTHOR, include_str!("../templates/add_author.hbs"))?;
        registry.register_template_string(ADD_BOOK, include_str!("../templates/add_book.hbs"))?;
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, page: &Page<'_, T>) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(name, page)?))
    }
}
