use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AuthorRequestBody;
use super::AuthorResponseData;
use crate::author::errors::AuthorError;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::AuthorName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_author(
    State(state): State<AppState>,
    author_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<AuthorRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AuthorResponseData>, ApiError> {
    let Path(author_id) = author_id?;
    let Json(body) = body?;
    let name = AuthorName::new(&body.name).map_err(AuthorError::from)?;

    state
        .author_service
        .update_author(&AuthorId(author_id), name)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
