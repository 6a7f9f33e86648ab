//! Signed session tokens.
//!
//! Sessions are stateless: the cookie value is a signed claims payload
//! carrying the username and an expiry, and validity is purely a
//! signature plus expiry check. Only the login handler issues tokens;
//! everything else verifies.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use shoutbox_types::api::SessionClaims;

use crate::error::AuthError;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Signing secret and token lifetime.
#[derive(Clone)]
pub struct SessionConfig {
    secret: String,
    ttl_secs: u64,
}

impl SessionConfig {
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    /// Config with a freshly generated random secret. Tokens signed under
    /// it stop verifying when the process exits.
    pub fn ephemeral(ttl_secs: u64) -> Self {
        Self::new(generate_secret(), ttl_secs)
    }
}

/// Issue a signed token for `username`, expiring after the configured TTL.
pub fn issue(config: &SessionConfig, username: &str) -> Result<String, AuthError> {
    let claims = SessionClaims {
        sub: username.to_string(),
        exp: (Utc::now() + chrono::Duration::seconds(config.ttl_secs as i64)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Check signature and expiry; return the embedded claims.
pub fn verify(config: &SessionConfig, token: &str) -> Result<SessionClaims, AuthError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid(e.to_string()),
    })
}

/// 32 random bytes, base64url-encoded without padding.
fn generate_secret() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    URL_SAFE_NO_PAD.encode(bytes)
}
