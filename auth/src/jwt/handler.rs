use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// JWT token handler for issuing and parsing access tokens.
///
/// Expiry is checked against a caller-supplied `now` instead of the system
/// clock, which keeps the validity window deterministic under test.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler from token settings.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret()),
            decoding_key: DecodingKey::from_secret(settings.secret()),
            algorithm: settings.algorithm(),
            ttl: settings.ttl(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` expiring `ttl` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, now, self.ttl))
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed token, missing subject, or
    ///   `now` at or past the expiry instant
    pub fn parse(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the injected clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                JwtError::InvalidToken
            })?
            .claims;

        if claims.subject().is_none() {
            tracing::debug!("Token rejected: missing subject");
            return Err(JwtError::InvalidToken);
        }

        if claims.is_expired(now) {
            tracing::debug!(exp = claims.exp, now = now.timestamp(), "Token rejected: expired");
            return Err(JwtError::InvalidToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn handler() -> JwtHandler {
        JwtHandler::new(&TokenSettings::hs256(SECRET, Duration::minutes(60)))
    }

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_issue_and_parse() {
        let handler = handler();
        let t0 = at(1_704_110_400);

        let token = handler.issue("alice@x.com", t0).expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = handler.parse(&token, t0).expect("Failed to parse token");
        assert_eq!(claims.subject(), Some("alice@x.com"));
        assert_eq!(claims.exp, t0.timestamp() + 3600);
    }

    #[test]
    fn test_parse_respects_validity_window() {
        let handler = handler();
        let t0 = at(1_704_110_400);
        let token = handler.issue("alice@x.com", t0).unwrap();

        assert!(handler.parse(&token, t0 + Duration::minutes(59)).is_ok());
        assert!(handler
            .parse(&token, t0 + Duration::minutes(60) - Duration::seconds(1))
            .is_ok());
        assert_eq!(
            handler.parse(&token, t0 + Duration::minutes(60)),
            Err(JwtError::InvalidToken)
        );
        assert_eq!(
            handler.parse(&token, t0 + Duration::minutes(61)),
            Err(JwtError::InvalidToken)
        );
    }

    #[test]
    fn test_parse_malformed_token() {
        let result = handler().parse("token-invalido", Utc::now());
        assert_eq!(result, Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_parse_with_wrong_secret() {
        let issuer = JwtHandler::new(&TokenSettings::hs256(
            b"secret1_at_least_32_bytes_long_key!".as_slice(),
            Duration::minutes(60),
        ));
        let now = Utc::now();
        let token = issuer.issue("alice@x.com", now).unwrap();

        assert_eq!(handler().parse(&token, now), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_parse_with_wrong_algorithm() {
        let settings =
            TokenSettings::new(SECRET, Algorithm::HS512, Duration::minutes(60)).unwrap();
        let issuer = JwtHandler::new(&settings);
        let now = Utc::now();
        let token = issuer.issue("alice@x.com", now).unwrap();

        assert_eq!(handler().parse(&token, now), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_parse_missing_subject() {
        let handler = handler();
        let now = Utc::now();
        let claims = Claims {
            sub: None,
            exp: (now + Duration::minutes(5)).timestamp(),
            iat: None,
        };
        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.parse(&token, now), Err(JwtError::InvalidToken));
    }
}
