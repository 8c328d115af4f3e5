use std::fmt;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookTitleError;
use crate::domain::book::errors::YearError;
use crate::domain::normalize::normalize_name;

/// Book record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub year: Year,
    pub title: BookTitle,
    pub author_id: AuthorId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Publication year, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year(i32);

impl Year {
    /// # Errors
    /// * `NotPositive` - Year is zero or negative
    pub fn new(year: i32) -> Result<Self, YearError> {
        if year > 0 {
            Ok(Self(year))
        } else {
            Err(YearError::NotPositive(year))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Normalized, non-empty book title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    /// # Errors
    /// * `Empty` - Nothing left after normalization
    pub fn new(raw: &str) -> Result<Self, BookTitleError> {
        let title = normalize_name(raw);
        if title.is_empty() {
            return Err(BookTitleError::Empty);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
pub struct CreateBookCommand {
    pub year: Year,
    pub title: BookTitle,
    pub author_id: AuthorId,
}

/// Optional title-contains and exact-year filters with offset pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSearch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub limit: u32,
    pub offset: u32,
}

impl BookSearch {
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Build a search; a blank title filter and a non-positive year filter
    /// are dropped, since no stored book can match either.
    pub fn new(title: Option<&str>, year: Option<i32>, limit: u32, offset: u32) -> Self {
        Self {
            title: title.map(normalize_name).filter(|t| !t.is_empty()),
            year: year.filter(|y| *y > 0),
            limit,
            offset,
        }
    }
}
