//! Integration tests driving the HTTP server over a real socket


use library_catalog::{api, config::AppConfig, repository, AppState};
use reqwest::Client;
use sqlx::{Pool, Sqlite};
use tempfile::TempDir;

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub pool: Pool<Sqlite>,
    _dir: TempDir,
}

/// Start the server on an ephemeral port with a fresh database
pub async fn spawn_app() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = AppConfig::default();
    config.database.path = dir.path().join("data").join("library.sqlite");

    let pool = repository::connect(&config.database)
        .await
        .expect("Failed to open database");
    let state = AppState::new(config, pool.clone()).expect("Failed to build state");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, api::create_router(state))
            .await
            .expect("Server failed");
    });

    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client");

    TestApp {
        address: format!("http://{}", addr),
        client,
        pool,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get_text(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert!(response.status().is_success(), "GET {} failed", path);
        response.text().await.expect("Failed to read body")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Add an author and return its id as listed in the book form
    pub async fn add_author(&self, name: &str, birth_date: &str, death_date: &str) -> String {
        let response = self
            .post_form(
                "/add_author",
                &[
                    ("name", name),
                    ("birth_date", birth_date),
                    ("death_date", death_date),
                ],
            )
            .await;
        assert!(response.status().is_success());

        let form = self.get_text("/add_book").await;
        let marker = format!("\">{}</option>", name);
        let end = form.find(&marker).expect("Author missing from book form");
        let start = form[..end].rfind("value=\"").expect("Malformed option") + "value=\"".len();
        form[start..end].to_string()
    }

    pub async fn add_book(&self, title: &str, author_id: &str, year: &str, isbn: &str) {
        let response = self
            .post_form(
                "/add_book",
                &[
                    ("title", title),
                    ("author_id", author_id),
                    ("publication_year", year),
                    ("isbn", isbn),
                ],
            )
            .await;
        assert!(response.status().is_success());
    }

    /// Id of the listed book with the given title
    pub async fn book_id(&self, title: &str) -> String {
        let home = self.get_text("/").await;
        let row = home
            .find(&title_cell(title))
            .expect("Book missing from listing");
        let rest = &home[row..];
        let start = rest.find("/book/").expect("No delete form") + "/book/".len();
        let end = start + rest[start..].find('/').expect("Malformed delete action");
        rest[start..end].to_string()
    }
}

pub fn title_cell(title: &str) -> String {
    format!("<td class=\"title\">{}</td>", title)
}

/// Titles in the order they appear in a rendered listing
pub fn listed_titles(body: &str) -> Vec<String> {
    let open = "<td class=\"title\">";
    body.match_indices(open)
        .map(|(i, _)| {
            let start = i + open.len();
            let end = start + body[start..].find("</td>").expect("Unclosed title cell");
            body[start..end].to_string()
        })
        .collect()
}
