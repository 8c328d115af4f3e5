use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Principal;
use crate::domain::auth::ports::AuthServicePort;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Authenticator backed by the credential store.
///
/// Holds no per-request state; the store is the only shared resource.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

fn store_error(err: UserError) -> AuthError {
    AuthError::Store(err.to_string())
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let Some(user) = self
            .repository
            .find_by_email(email)
            .await
            .map_err(store_error)?
        else {
            tracing::warn!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        self.authenticator
            .authenticate(password, &user.password_hash, user.email.as_str(), now)
            .map(AccessToken::from)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login rejected: password mismatch");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => AuthError::TokenIssue(err.to_string()),
            })
    }

    async fn authenticate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Principal, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token, now)
            .map_err(|_| AuthError::InvalidToken)?;
        let subject = claims.subject().ok_or(AuthError::InvalidToken)?;

        let user = self
            .repository
            .find_by_email(subject)
            .await
            .map_err(store_error)?
            .ok_or_else(|| {
                tracing::warn!("Token subject has no credential record");
                AuthError::PrincipalNotFound
            })?;

        Ok(Principal::from(&user))
    }

    async fn refresh(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        self.authenticator
            .issue_token(principal.email().as_str(), now)
            .map(AccessToken::from)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }
}
