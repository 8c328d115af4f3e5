use async_trait::async_trait;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::AuthorName;
use crate::domain::author::models::AuthorSearch;

/// Port for author catalogue operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - An author with this name is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_author(&self, name: AuthorName) -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// Rename an author.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `AlreadyExists` - Another author already has the new name
    /// * `DatabaseError` - Database operation failed
    async fn update_author(&self, id: &AuthorId, name: AuthorName)
        -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError>;

    /// Authors whose name contains the search filter; an empty filter matches nothing.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_authors(&self, search: AuthorSearch) -> Result<Vec<Author>, AuthorError>;
}

/// Persistence operations for authors.
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - Unique name constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, name: AuthorName) -> Result<Author, AuthorError>;

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;

    async fn find_by_name(&self, name: &AuthorName) -> Result<Option<Author>, AuthorError>;

    /// Authors whose name contains `fragment`, ordered by identifier.
    async fn search(
        &self,
        fragment: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Author>, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `AlreadyExists` - Unique name constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, author: Author) -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError>;
}
