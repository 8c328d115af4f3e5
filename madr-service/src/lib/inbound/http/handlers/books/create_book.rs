use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::BookResponseData;
use crate::book::errors::BookError;
use crate::domain::author::models::AuthorId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Year;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .book_service
        .create_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    year: i32,
    title: String,
    author_id: i64,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, BookError> {
        Ok(CreateBookCommand {
            year: Year::new(self.year)?,
            title: BookTitle::new(&self.title)?,
            author_id: AuthorId(self.author_id),
        })
    }
}
