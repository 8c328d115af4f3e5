use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use super::errors::JwtError;

/// Immutable token configuration: signing secret, algorithm and lifetime.
///
/// Built once at startup and handed to `JwtHandler` / `Authenticator`.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Vec<u8>,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenSettings {
    /// Create settings for an HMAC algorithm.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is not HS256, HS384 or HS512
    pub fn new(
        secret: impl Into<Vec<u8>>,
        algorithm: Algorithm,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(Self {
                secret: secret.into(),
                algorithm,
                ttl,
            }),
            other => Err(JwtError::UnsupportedAlgorithm(format!("{:?}", other))),
        }
    }

    /// HS256 settings, the common case.
    pub fn hs256(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Build settings from their textual configuration form.
    ///
    /// # Arguments
    /// * `secret` - Signing secret
    /// * `algorithm` - Algorithm name, e.g. `"HS256"`
    /// * `ttl_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown or non-HMAC algorithm name
    pub fn from_config(secret: &str, algorithm: &str, ttl_minutes: i64) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;
        Self::new(secret.as_bytes(), algorithm, Duration::minutes(ttl_minutes))
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let settings = TokenSettings::from_config("secret", "HS384", 60).unwrap();

        assert_eq!(settings.algorithm(), Algorithm::HS384);
        assert_eq!(settings.ttl(), Duration::minutes(60));
        assert_eq!(settings.secret(), b"secret");
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        let result = TokenSettings::from_config("secret", "RS256", 60);
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = TokenSettings::from_config("secret", "HS999", 60);
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = TokenSettings::hs256("super-secret", Duration::minutes(5));
        let rendered = format!("{:?}", settings);

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));
    }
}
