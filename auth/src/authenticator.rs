use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenSettings;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Credential lookup is left to the caller; this type only knows how to check
/// a password against a stored hash and how to mint and verify tokens.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(settings),
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.jwt_handler.ttl()
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Token subject to embed on success
    /// * `now` - Issue instant; the token expires `ttl` later
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or hash is malformed)
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject, now)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used by refresh, once the presented token has already been validated.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, JwtError> {
        let access_token = self.jwt_handler.issue(subject, now)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: now + self.jwt_handler.ttl(),
        })
    }

    /// Validate a token at instant `now` and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Any validation failure
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        self.jwt_handler.parse(token, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(&TokenSettings::hs256(
            b"test_secret_key_at_least_32_bytes!".as_slice(),
            Duration::minutes(60),
        ))
    }

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let now = at(1_704_110_400);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("my_password", &hash, "alice@x.com", now)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.expires_at, now + Duration::minutes(60));

        let decoded = authenticator
            .validate_token(&result.access_token, now)
            .expect("Token validation failed");
        assert_eq!(decoded.subject(), Some("alice@x.com"));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "alice@x.com", Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let result =
            authenticator().authenticate("my_password", "not-a-phc-string", "a@x.com", Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_token_anchors_expiry_at_now() {
        let authenticator = authenticator();
        let t0 = at(1_704_110_400);
        let later = t0 + Duration::minutes(30);

        let result = authenticator.issue_token("alice@x.com", later).unwrap();
        let claims = authenticator.validate_token(&result.access_token, later).unwrap();

        assert_eq!(claims.exp, (later + Duration::minutes(60)).timestamp());
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here", Utc::now());
        assert_eq!(result, Err(JwtError::InvalidToken));
    }
}
