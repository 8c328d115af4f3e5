//! Authentication utilities library
//!
//! Provides the authentication primitives used by the MADR service:
//! - Password hashing (Argon2id)
//! - JWT access token issuance and validation against an explicit clock
//! - Authentication coordination
//!
//! Credential lookup stays in the service; this crate never touches storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, TokenSettings};
//! use chrono::{Duration, Utc};
//!
//! let settings = TokenSettings::hs256("secret_key_at_least_32_bytes_long!", Duration::minutes(60));
//! let handler = JwtHandler::new(&settings);
//! let now = Utc::now();
//! let token = handler.issue("alice@x.com", now).unwrap();
//! let claims = handler.parse(&token, now).unwrap();
//! assert_eq!(claims.subject(), Some("alice@x.com"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenSettings};
//! use chrono::{Duration, Utc};
//!
//! let settings = TokenSettings::hs256("secret_key_at_least_32_bytes_long!", Duration::minutes(60));
//! let auth = Authenticator::new(&settings);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let now = Utc::now();
//! let result = auth.authenticate("password123", &hash, "alice@x.com", now).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token, now).unwrap();
//! assert_eq!(claims.subject(), Some("alice@x.com"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
