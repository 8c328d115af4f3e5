use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::author::models::AuthorId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_author(
    State(state): State<AppState>,
    author_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Path(author_id) = author_id?;

    state
        .author_service
        .delete_author(&AuthorId(author_id))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Author deleted from MADR."),
    ))
}
