use thiserror::Error;

/// Error type for JWT operations.
///
/// Every decoding failure (bad signature, malformed token, missing subject,
/// expiry) is reported as the single `InvalidToken` variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
