use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookSearch;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Year;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;

pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        if let Some(existing) = self.repository.find_by_title(&command.title).await? {
            return Err(BookError::AlreadyExists(existing.title.to_string()));
        }

        let book = self.repository.create(command).await?;
        tracing::info!(book_id = %book.id, "Book added");

        Ok(book)
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(*id))
    }

    async fn update_book_year(&self, id: &BookId, year: Year) -> Result<Book, BookError> {
        let mut book = self.get_book(id).await?;
        book.year = year;
        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.repository.delete(id).await?;
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    async fn search_books(&self, search: BookSearch) -> Result<Vec<Book>, BookError> {
        self.repository.search(&search).await
    }
}
