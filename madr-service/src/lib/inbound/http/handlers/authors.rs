use serde::Deserialize;
use serde::Serialize;

use crate::domain::author::models::Author;

pub mod create_author;
pub mod delete_author;
pub mod get_author;
pub mod search_authors;
pub mod update_author;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponseData {
    pub id: i64,
    pub name: String,
}

impl From<&Author> for AuthorResponseData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.0,
            name: author.name.as_str().to_string(),
        }
    }
}

/// Body of both create and rename.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorRequestBody {
    name: String,
}
