use std::fmt;

use crate::domain::author::errors::AuthorNameError;
use crate::domain::normalize::normalize_name;

/// Author record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(pub i64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalized, non-empty author name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    /// # Errors
    /// * `Empty` - Nothing left after normalization
    pub fn new(raw: &str) -> Result<Self, AuthorNameError> {
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(AuthorNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Name-contains search with offset pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSearch {
    pub name: String,
    pub limit: u32,
    pub offset: u32,
}

impl AuthorSearch {
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Build a search; the filter is normalized like stored names.
    pub fn new(name: &str, limit: u32, offset: u32) -> Self {
        Self {
            name: normalize_name(name),
            limit,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_normalized() {
        let name = AuthorName::new("  Machado   de Assis ").unwrap();
        assert_eq!(name.as_str(), "machado de assis");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(AuthorName::new(" \t "), Err(AuthorNameError::Empty));
    }

    #[test]
    fn test_search_filter_is_normalized() {
        let search = AuthorSearch::new(" Author ", 20, 0);
        assert_eq!(search.name, "author");
    }
}
