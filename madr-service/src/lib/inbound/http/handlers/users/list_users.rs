use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::UserResponseData;
use crate::domain::user::models::ListUsersQuery;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<ListUsersParams>, QueryRejection>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let Query(params) = params?;

    let defaults = ListUsersQuery::default();
    let query = ListUsersQuery {
        skip: params.skip.unwrap_or(defaults.skip),
        limit: params.limit.unwrap_or(defaults.limit),
    };

    let users = state.user_service.list_users(query).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData {
            users: users.iter().map(UserResponseData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersParams {
    skip: Option<u32>,
    limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<UserResponseData>,
}
