use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookSearch;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Year;

/// Port for book catalogue operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - A book with this title is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Change the publication year of a book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_book_year(&self, id: &BookId, year: Year) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_books(&self, search: BookSearch) -> Result<Vec<Book>, BookError>;
}

/// Persistence operations for books.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - Unique title constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>, BookError>;

    /// Books matching every present filter, ordered by identifier.
    async fn search(&self, search: &BookSearch) -> Result<Vec<Book>, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
