//! Authentication error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Login rejection. Identical for an unknown username and a wrong
    /// password.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session token expired")]
    TokenExpired,

    #[error("invalid session token: {0}")]
    TokenInvalid(String),

    #[error("token signing failed: {0}")]
    Signing(String),
}
