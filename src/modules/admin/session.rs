use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "admin-auth";
const SESSION_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to sign session token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues and validates the signed token carried by the `admin-auth` cookie.
/// The cookie value is the session, there is no server-side session state.
#[derive(Clone)]
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_env() -> Self {
        let secret = std::env::var("ADMIN_SESSION_SECRET")
            .unwrap_or_else(|_| "portfolio-dev-session-secret".to_string());
        Self::new(&secret)
    }

    pub fn issue(&self, username: &str) -> Result<String, SessionError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: username.to_string(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Signature and expiry check; anything invalid is simply not a session.
    pub fn validate(&self, token: &str) -> bool {
        decode::<SessionClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256)).is_ok()
    }
}
