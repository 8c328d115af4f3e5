use thiserror::Error;

/// Authentication and authorization failures.
///
/// The display strings are the exact messages shown to clients, so the
/// variants that must stay indistinguishable share one message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password at login.
    #[error("Incorrect email or password.")]
    InvalidCredentials,

    /// Token failed signature, structure, subject or expiry checks.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Token is valid but its subject no longer resolves to a user.
    #[error("Could not validate credentials")]
    PrincipalNotFound,

    #[error("Not enough permissions.")]
    Forbidden,

    #[error("Token generation failed: {0}")]
    TokenIssue(String),

    #[error("Credential lookup failed: {0}")]
    Store(String),
}
