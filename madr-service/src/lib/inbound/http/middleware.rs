use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Middleware that resolves the bearer token into a `Principal` and stores
/// it in the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| {
            tracing::debug!("Missing or malformed Authorization header");
            ApiError::Unauthorized(NOT_AUTHENTICATED.to_string())
        })?
        .to_string();

    let principal = state
        .auth_service
        .authenticate(&token, Utc::now())
        .await
        .map_err(|e| {
            tracing::warn!(error = ?e, "Bearer token rejected");
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Token part of an `Authorization: Bearer <token>` header. The scheme is
/// matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
