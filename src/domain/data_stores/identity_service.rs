use thiserror::Error;

use crate::domain::UserClaims;

#[derive(Error, Debug, PartialEq)]
pub enum IdentityError {
    #[error("token expired")]
    TokenExpired,

    #[error("token invalid")]
    TokenInvalid,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Result of a password sign-in at the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedInUser {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    pub id_token: String,
    pub expires_in: i64,
}

/// Handle to the external identity provider.
///
/// Verification failures are terminal for the request that triggered them;
/// no retries happen at this layer.
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Asks the provider to validate a bearer token and decode its claims.
    async fn verify_token(&self, raw_token: &str) -> Result<UserClaims, IdentityError>;

    /// Exchanges email + password for a token at the provider.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser, IdentityError>;

    /// Releases the provider handle. Called once, while draining.
    async fn close(&self);
}
