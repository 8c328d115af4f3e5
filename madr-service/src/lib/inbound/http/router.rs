use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authors::create_author::create_author;
use super::handlers::authors::delete_author::delete_author;
use super::handlers::authors::get_author::get_author;
use super::handlers::authors::search_authors::search_authors;
use super::handlers::authors::update_author::update_author;
use super::handlers::books::create_book::create_book;
use super::handlers::books::delete_book::delete_book;
use super::handlers::books::get_book::get_book;
use super::handlers::books::search_books::search_books;
use super::handlers::books::update_book::update_book;
use super::handlers::root::root;
use super::handlers::tokens::login::login;
use super::handlers::tokens::refresh_token::refresh_token;
use super::handlers::users::create_user::create_user;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_user::get_user;
use super::handlers::users::list_users::list_users;
use super::handlers::users::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub author_service: Arc<dyn AuthorServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
    author_service: Arc<dyn AuthorServicePort>,
    book_service: Arc<dyn BookServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        auth_service,
        author_service,
        book_service,
    };

    // Bearer check sits on method routers only; unmatched methods stay 405.
    let require_bearer = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let routes = Router::new()
        .route("/", get(root))
        .route("/auth/token", post(login))
        .route(
            "/auth/refresh_token",
            post(refresh_token).route_layer(require_bearer.clone()),
        )
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:user_id",
            get(get_user).merge(
                put(update_user)
                    .delete(delete_user)
                    .route_layer(require_bearer.clone()),
            ),
        )
        .route(
            "/author",
            get(search_authors).merge(post(create_author).route_layer(require_bearer.clone())),
        )
        .route(
            "/author/:author_id",
            get(get_author).merge(
                patch(update_author)
                    .delete(delete_author)
                    .route_layer(require_bearer.clone()),
            ),
        )
        .route(
            "/book",
            get(search_books).merge(post(create_book).route_layer(require_bearer.clone())),
        )
        .route(
            "/book/:book_id",
            get(get_book).merge(
                patch(update_book)
                    .delete(delete_book)
                    .route_layer(require_bearer),
            ),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
