use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

/// Public view of a user; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

/// Request body shared by registration and full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRequestBody {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseUserRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UserRequestBody {
    fn try_into_parts(self) -> Result<(Username, EmailAddress, String), ParseUserRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        Ok((username, email, self.password))
    }
}

impl From<ParseUserRequestError> for ApiError {
    fn from(err: ParseUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
