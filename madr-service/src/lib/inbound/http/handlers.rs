use axum::extract::rejection::FormRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::author::errors::AuthorError;
use crate::book::errors::BookError;
use crate::domain::auth::errors::AuthError;
use crate::user::errors::UserError;

pub mod authors;
pub mod books;
pub mod root;
pub mod tokens;
pub mod users;

/// Successful response; the data is serialized as the whole body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Plain acknowledgement body, e.g. `{"message": "User Deleted."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Unauthorized(msg) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                    Json(ApiErrorData { detail: msg }),
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorData { detail: message })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub detail: String,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            AuthError::InvalidToken | AuthError::PrincipalNotFound => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::Forbidden => ApiError::Forbidden(err.to_string()),
            AuthError::TokenIssue(_) | AuthError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::InvalidUsername(_) | UserError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Auth(auth) => auth.into(),
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthorError> for ApiError {
    fn from(err: AuthorError) -> Self {
        match err {
            AuthorError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AuthorError::AlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            AuthorError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthorError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookError::AlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            BookError::InvalidTitle(_) | BookError::InvalidYear(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

// Extractor rejections keep the `{"detail": ...}` body shape.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_conflicts_map_to_bad_request() {
        let err = ApiError::from(UserError::EmailAlreadyExists("a@x.com".to_string()));
        assert_eq!(err, ApiError::BadRequest("Email already exists.".to_string()));
    }

    #[test]
    fn test_forbidden_inside_user_error_maps_to_forbidden() {
        let err = ApiError::from(UserError::Auth(AuthError::Forbidden));
        assert_eq!(err, ApiError::Forbidden("Not enough permissions.".to_string()));
    }

    #[test]
    fn test_token_failures_share_one_message() {
        assert_eq!(
            ApiError::from(AuthError::InvalidToken),
            ApiError::from(AuthError::PrincipalNotFound)
        );
        assert_eq!(
            ApiError::from(UserError::NotFound(UserId(1))),
            ApiError::NotFound("User not found.".to_string())
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge_header() {
        let response = ApiError::Unauthorized("Not authenticated".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let response =
            ApiError::InternalServerError("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
