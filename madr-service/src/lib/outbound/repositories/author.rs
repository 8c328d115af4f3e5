use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::unique_violation;
use crate::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::AuthorName;
use crate::domain::author::ports::AuthorRepository;

pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = AuthorError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId(row.id),
            name: AuthorName::new(&row.name)?,
        })
    }
}

fn write_error(e: sqlx::Error, name: &AuthorName) -> AuthorError {
    match unique_violation(&e) {
        Some("authors_name_key") => AuthorError::AlreadyExists(name.to_string()),
        _ => AuthorError::DatabaseError(e.to_string()),
    }
}

fn read_error(e: sqlx::Error) -> AuthorError {
    AuthorError::DatabaseError(e.to_string())
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn create(&self, name: AuthorName) -> Result<Author, AuthorError> {
        let row: AuthorRow = sqlx::query_as(
            r#"
            INSERT INTO authors (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &name))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        let row: Option<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_name(&self, name: &AuthorName) -> Result<Option<Author>, AuthorError> {
        let row: Option<AuthorRow> =
            sqlx::query_as("SELECT id, name FROM authors WHERE name = $1")
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(read_error)?;

        row.map(Author::try_from).transpose()
    }

    async fn search(
        &self,
        fragment: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Author>, AuthorError> {
        // strpos keeps `%` and `_` in the filter literal
        let rows: Vec<AuthorRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM authors
            WHERE strpos(name, $1) > 0
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(fragment)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        rows.into_iter().map(Author::try_from).collect()
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let row: Option<AuthorRow> = sqlx::query_as(
            r#"
            UPDATE authors
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(author.id.0)
        .bind(author.name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &author.name))?;

        row.ok_or(AuthorError::NotFound(author.id))?.try_into()
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthorError::NotFound(*id));
        }

        Ok(())
    }
}
