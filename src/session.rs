use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::credentials::CredentialProvider;

pub const SESSION_COOKIE: &str = "admin-token";

pub fn session_ttl() -> Duration {
    Duration::hours(24)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("not logged in")]
    Missing,

    #[error("invalid session token")]
    Invalid,

    #[error("session expired")]
    Expired,

    #[error("invalid username or password")]
    BadCredentials,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks signed admin session tokens.
pub struct SessionGuard {
    credentials: Arc<dyn CredentialProvider>,
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionGuard {
    pub fn new(credentials: Arc<dyn CredentialProvider>, secret: &[u8]) -> Self {
        Self {
            credentials,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: session_ttl(),
        }
    }

    /// Check the credentials and hand out a fresh token.
    pub fn login(&self, username: &str, password: &str) -> Result<String, SessionError> {
        if !self.credentials.verify(username, password) {
            return Err(SessionError::BadCredentials);
        }
        self.issue_at(username, Utc::now())
    }

    pub fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, SessionError> {
        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| SessionError::Invalid)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid,
            })?
            .claims;

        if claims.sub != self.credentials.username() {
            return Err(SessionError::Invalid);
        }
        Ok(claims)
    }
}
