use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::AuthorResponseData;
use crate::domain::author::models::AuthorId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_author(
    State(state): State<AppState>,
    author_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<AuthorResponseData>, ApiError> {
    let Path(author_id) = author_id?;

    state
        .author_service
        .get_author(&AuthorId(author_id))
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
