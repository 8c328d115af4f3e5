use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::unique_violation;
use crate::book::errors::BookError;
use crate::domain::author::models::AuthorId;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookSearch;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Year;
use crate::domain::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    year: i32,
    title: String,
    author_id: i64,
}

impl TryFrom<BookRow> for Book {
    type Error = BookError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: BookId(row.id),
            year: Year::new(row.year)?,
            title: BookTitle::new(&row.title)?,
            author_id: AuthorId(row.author_id),
        })
    }
}

fn write_error(e: sqlx::Error, title: &BookTitle) -> BookError {
    match unique_violation(&e) {
        Some("books_title_key") => BookError::AlreadyExists(title.to_string()),
        _ => BookError::DatabaseError(e.to_string()),
    }
}

fn read_error(e: sqlx::Error) -> BookError {
    BookError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books (year, title, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, year, title, author_id
            "#,
        )
        .bind(command.year.value())
        .bind(command.title.as_str())
        .bind(command.author_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &command.title))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row: Option<BookRow> =
            sqlx::query_as("SELECT id, year, title, author_id FROM books WHERE id = $1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(read_error)?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>, BookError> {
        let row: Option<BookRow> =
            sqlx::query_as("SELECT id, year, title, author_id FROM books WHERE title = $1")
                .bind(title.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(read_error)?;

        row.map(Book::try_from).transpose()
    }

    async fn search(&self, search: &BookSearch) -> Result<Vec<Book>, BookError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, year, title, author_id
            FROM books
            WHERE ($1::TEXT IS NULL OR strpos(title, $1) > 0)
              AND ($2::INTEGER IS NULL OR year = $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(search.title.as_deref())
        .bind(search.year)
        .bind(i64::from(search.limit))
        .bind(i64::from(search.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            UPDATE books
            SET year = $2, title = $3, author_id = $4
            WHERE id = $1
            RETURNING id, year, title, author_id
            "#,
        )
        .bind(book.id.0)
        .bind(book.year.value())
        .bind(book.title.as_str())
        .bind(book.author_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &book.title))?;

        row.ok_or(BookError::NotFound(book.id))?.try_into()
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(*id));
        }

        Ok(())
    }
}
