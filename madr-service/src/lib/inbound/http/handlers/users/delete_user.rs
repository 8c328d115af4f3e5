use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::auth::models::Principal;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let Path(user_id) = user_id?;

    state
        .user_service
        .delete_user(&principal, &UserId(user_id))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("User Deleted."),
    ))
}
