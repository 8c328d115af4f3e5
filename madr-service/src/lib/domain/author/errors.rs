use thiserror::Error;

use crate::domain::author::models::AuthorId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorNameError {
    #[error("Author name must not be empty")]
    Empty,
}

#[derive(Debug, Clone, Error)]
pub enum AuthorError {
    #[error("Invalid author name: {0}")]
    InvalidName(#[from] AuthorNameError),

    #[error("Author not found in MADR.")]
    NotFound(AuthorId),

    #[error("{0} already in MADR.")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
