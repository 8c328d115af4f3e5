use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::AuthorResponseData;
use crate::domain::author::models::AuthorSearch;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn search_authors(
    State(state): State<AppState>,
    params: Result<Query<SearchAuthorsParams>, QueryRejection>,
) -> Result<ApiSuccess<SearchAuthorsResponseData>, ApiError> {
    let Query(params) = params?;

    let search = AuthorSearch::new(
        params.name.as_deref().unwrap_or_default(),
        params.limit.unwrap_or(AuthorSearch::DEFAULT_LIMIT),
        params.offset.unwrap_or_default(),
    );

    let authors = state.author_service.search_authors(search).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SearchAuthorsResponseData {
            authors: authors.iter().map(AuthorResponseData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchAuthorsParams {
    name: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAuthorsResponseData {
    pub authors: Vec<AuthorResponseData>,
}
