use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Principal;

/// Port for login, request authentication and token refresh.
///
/// Every operation takes the current instant explicitly; token validity is
/// always judged against that `now`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange email and password for an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenIssue` - Token could not be signed
    /// * `Store` - Credential lookup failed
    async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token into the principal it was issued for.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, forged, subject-less or expired
    /// * `PrincipalNotFound` - Subject no longer has a credential record
    /// * `Store` - Credential lookup failed
    async fn authenticate(&self, token: &str, now: DateTime<Utc>)
        -> Result<Principal, AuthError>;

    /// Issue a fresh token for a principal that `authenticate` just produced.
    ///
    /// The new expiry is anchored at `now`, never at the old token's issue time.
    ///
    /// # Errors
    /// * `TokenIssue` - Token could not be signed
    async fn refresh(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError>;
}
