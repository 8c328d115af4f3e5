use thiserror::Error;

use crate::domain::book::models::BookId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Book title must not be empty")]
    Empty,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum YearError {
    #[error("Year must be greater than 0, got {0}")]
    NotPositive(i32),
}

#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book title: {0}")]
    InvalidTitle(#[from] BookTitleError),

    #[error("Invalid year: {0}")]
    InvalidYear(#[from] YearError),

    #[error("Book not found in MADR.")]
    NotFound(BookId),

    #[error("{0} already in MADR.")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
