use crate::app_state::AppState;
use crate::domain::{IdentityError, UserClaims};
use crate::errors::AuthError;

pub struct AuthService {}

impl AuthService {
    /// Resolves a bearer token to identity claims.
    ///
    /// The cache is consulted first; a fresh entry short-circuits the
    /// provider entirely. On a miss the provider verifies the token and the
    /// result is cached for the next window. Nothing is cached on failure.
    pub async fn authenticate(state: &AppState, raw_token: &str) -> Result<UserClaims, AuthError> {
        if let Some(hit) = state.token_cache.write().await.get(raw_token).await {
            return Ok(hit.claims);
        }

        let claims = state
            .identity_service
            .verify_token(raw_token)
            .await
            .map_err(|e| match e {
                IdentityError::TokenExpired => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?;

        state
            .token_cache
            .write()
            .await
            .put(raw_token.to_owned(), claims.clone())
            .await;

        Ok(claims)
    }
}
