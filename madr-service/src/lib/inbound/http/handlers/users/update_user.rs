use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::UserRequestBody;
use super::UserResponseData;
use crate::domain::auth::models::Principal;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    user_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let Path(user_id) = user_id?;
    let Json(body) = body?;
    let (username, email, password) = body.try_into_parts()?;

    let command = UpdateUserCommand {
        username,
        email,
        password,
    };

    state
        .user_service
        .update_user(&principal, &UserId(user_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
