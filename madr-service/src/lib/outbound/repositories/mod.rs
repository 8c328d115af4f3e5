pub mod author;
pub mod book;
pub mod user;

pub use author::PostgresAuthorRepository;
pub use book::PostgresBookRepository;
pub use user::PostgresUserRepository;

/// Name of the violated unique constraint, if `err` is a unique violation.
fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    err.as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint())
}
