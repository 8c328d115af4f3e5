use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token payload.
///
/// `sub` carries the principal's email. It stays optional on the wire so a
/// token without a subject still decodes and can be rejected explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims for `subject` issued at `issued_at`, expiring `ttl` later.
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: (issued_at + ttl).timestamp(),
            iat: Some(issued_at.timestamp()),
        }
    }

    /// Subject, if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Expired once `now` reaches the expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("alice@x.com", at(1_700_000_000), Duration::minutes(60));

        assert_eq!(claims.subject(), Some("alice@x.com"));
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp - claims.iat.unwrap(), 60 * 60);
        assert_eq!(claims.expires_at(), Some(at(1_700_003_600)));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::for_subject("alice@x.com", at(1000), Duration::seconds(100));

        assert!(!claims.is_expired(at(1099)));
        assert!(claims.is_expired(at(1100))); // Exactly at expiration
        assert!(claims.is_expired(at(1101)));
    }

    #[test]
    fn test_empty_subject_is_absent() {
        let mut claims = Claims::for_subject("", at(1000), Duration::seconds(100));
        assert_eq!(claims.subject(), None);

        claims.sub = None;
        assert_eq!(claims.subject(), None);
    }
}
