use serde::Serialize;

use crate::domain::auth::models::AccessToken;

pub mod login;
pub mod refresh_token;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.token,
            token_type: AccessToken::TOKEN_TYPE.to_string(),
        }
    }
}
