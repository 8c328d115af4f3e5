use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageResponseData;

pub async fn root() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Root Endpoint!"))
}
