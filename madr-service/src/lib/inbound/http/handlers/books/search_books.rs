use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::BookResponseData;
use crate::domain::book::models::BookSearch;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn search_books(
    State(state): State<AppState>,
    params: Result<Query<SearchBooksParams>, QueryRejection>,
) -> Result<ApiSuccess<SearchBooksResponseData>, ApiError> {
    let Query(params) = params?;

    let search = BookSearch::new(
        params.name.as_deref(),
        params.year,
        params.limit.unwrap_or(BookSearch::DEFAULT_LIMIT),
        params.offset.unwrap_or_default(),
    );

    let books = state.book_service.search_books(search).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SearchBooksResponseData {
            books: books.iter().map(BookResponseData::from).collect(),
        },
    ))
}

/// `name` filters on the title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchBooksParams {
    name: Option<String>,
    year: Option<i32>,
    limit: Option<u32>,
    offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBooksResponseData {
    pub books: Vec<BookResponseData>,
}
