use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::BookResponseData;
use crate::domain::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let Path(book_id) = book_id?;

    state
        .book_service
        .get_book(&BookId(book_id))
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
