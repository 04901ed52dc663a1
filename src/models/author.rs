//! Author model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use std::fmt;

/// Author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub author_id: i64,
    pub name: String,
    /// Free-form date text, never parsed
    pub birth_date: String,
    pub death_date: Option<String>,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Author {} with the name {}, born on {}",
            self.author_id, self.name, self.birth_date
        )
    }
}

/// Create author form
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    /// An empty field means the author is still alive
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub death_date: Option<String>,
}
