use serde::Serialize;

use crate::domain::book::models::Book;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod search_books;
pub mod update_book;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponseData {
    pub id: i64,
    pub year: i32,
    pub title: String,
    pub author_id: i64,
}

impl From<&Book> for BookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            year: book.year.value(),
            title: book.title.as_str().to_string(),
            author_id: book.author_id.0,
        }
    }
}
