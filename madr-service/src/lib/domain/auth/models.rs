use auth::AuthenticationResult;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// The authenticated identity attached to a request.
///
/// A read-only view of the credential record; it carries no password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    id: UserId,
    username: Username,
    email: EmailAddress,
}

impl Principal {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Email address, also the token subject.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Signed bearer token together with its expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub const TOKEN_TYPE: &'static str = "bearer";
}

impl From<AuthenticationResult> for AccessToken {
    fn from(result: AuthenticationResult) -> Self {
        Self {
            token: result.access_token,
            expires_at: result.expires_at,
        }
    }
}
