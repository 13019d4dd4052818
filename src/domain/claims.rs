use serde::{Deserialize, Serialize};

/// Identity claims returned by the provider for a verified bearer token.
///
/// Attached to the request as an extension once the authentication gate has
/// accepted the credential; dropped with the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaims {
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
    /// Unix seconds the provider issued the token at.
    pub issued_at: i64,
    /// The token's own provider-side expiry, unix seconds. The cache window
    /// is independent of this value.
    pub expires_at: i64,
}
