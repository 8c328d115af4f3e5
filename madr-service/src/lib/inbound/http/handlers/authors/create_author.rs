use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AuthorRequestBody;
use super::AuthorResponseData;
use crate::author::errors::AuthorError;
use crate::domain::author::models::AuthorName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_author(
    State(state): State<AppState>,
    body: Result<Json<AuthorRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AuthorResponseData>, ApiError> {
    let Json(body) = body?;
    let name = AuthorName::new(&body.name).map_err(AuthorError::from)?;

    state
        .author_service
        .create_author(name)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::CREATED, author.into()))
}
