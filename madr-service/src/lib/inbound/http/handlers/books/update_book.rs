use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::BookResponseData;
use crate::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::models::Year;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let Path(book_id) = book_id?;
    let Json(body) = body?;
    let year = Year::new(body.year).map_err(BookError::from)?;

    state
        .book_service
        .update_book_year(&BookId(book_id), year)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequest {
    year: i32,
}
