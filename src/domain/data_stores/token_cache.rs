use tokio::time::Instant;

use crate::domain::UserClaims;

/// A verified token held in the cache.
///
/// `expires_at` is always the verification instant plus the cache window,
/// never the token's own provider expiry. Within the window the claims are
/// served without consulting the provider again, which means a token the
/// provider already considers stale can still be accepted for up to one
/// window. That staleness bound is a deliberate tradeoff against one
/// verification round-trip per request.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub claims: UserClaims,
    pub expires_at: Instant,
}

/// Process-local cache of verified bearer tokens.
///
/// At most one record exists per raw token string. Implementations are
/// handed to the authentication gate, not reached through a global.
#[async_trait::async_trait]
pub trait TokenCache: Send + Sync {
    /// Returns the record for `raw_token` if present and still inside its
    /// window. A present-but-expired record is removed on the way out.
    async fn get(&mut self, raw_token: &str) -> Option<CachedToken>;

    /// Inserts or overwrites the record for `raw_token`, stamping a fresh
    /// window.
    async fn put(&mut self, raw_token: String, claims: UserClaims);

    /// Drops every entry. Used only while the server is draining.
    async fn clear(&mut self);

    async fn len(&self) -> usize;
}
