use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Path(book_id) = book_id?;

    state.book_service.delete_book(&BookId(book_id)).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Book deleted from MADR."),
    ))
}
