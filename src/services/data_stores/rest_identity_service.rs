//! REST client for the external identity provider.
//!
//! Two operations are used by this backend:
//! - `accounts:signInWithPassword` exchanges email + password for an ID
//!   token (the `/api/login` flow);
//! - `accounts:lookup` validates a presented ID token and returns the
//!   decoded claims (the authentication gate's fallback path).
//!
//! Provider error codes are mapped onto `IdentityError`; anything the
//! provider does not explicitly classify is treated as an outage. There are
//! no retries here: a failed call is terminal for the request that made it.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{IdentityError, IdentityService, SignedInUser, UserClaims};
use crate::utils::Config;

pub struct RestIdentityService {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    project_id: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInBody {
    local_id: String,
    email: String,
    #[serde(default)]
    email_verified: bool,
    id_token: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct LookupBody {
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    #[serde(default)]
    issued_at: i64,
    #[serde(default)]
    expires_at: i64,
}

impl RestIdentityService {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.identity_timeout_seconds()))
            .build()?;

        Ok(Self {
            http,
            base_url: config.identity_base_url().trim_end_matches('/').to_owned(),
            api_key: config.identity_api_key().to_owned(),
            project_id: config.identity_project_id().to_owned(),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{}?key={}", self.base_url, method, self.api_key)
    }

    async fn provider_error(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ProviderErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("HTTP {}", status),
        }
    }
}

#[async_trait::async_trait]
impl IdentityService for RestIdentityService {
    async fn verify_token(&self, raw_token: &str) -> Result<UserClaims, IdentityError> {
        let response = self
            .http
            .post(self.endpoint("lookup"))
            .json(&serde_json::json!({ "idToken": raw_token }))
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let is_server_side = response.status().is_server_error();
            let message = Self::provider_error(response).await;
            if is_server_side {
                return Err(IdentityError::Unavailable(message));
            }
            // TOKEN_EXPIRED may arrive suffixed with provider detail.
            if message.starts_with("TOKEN_EXPIRED") {
                return Err(IdentityError::TokenExpired);
            }
            return Err(IdentityError::TokenInvalid);
        }

        let body: LookupBody = response
            .json()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        let user = body.users.into_iter().next().ok_or(IdentityError::TokenInvalid)?;

        Ok(UserClaims {
            uid: user.local_id,
            email: user.email,
            email_verified: user.email_verified,
            issued_at: user.issued_at,
            expires_at: user.expires_at,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser, IdentityError> {
        let response = self
            .http
            .post(self.endpoint("signInWithPassword"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let is_server_side = response.status().is_server_error();
            let message = Self::provider_error(response).await;
            if is_server_side {
                return Err(IdentityError::Unavailable(message));
            }
            if message.starts_with("EMAIL_NOT_FOUND") {
                return Err(IdentityError::UserNotFound);
            }
            if message.starts_with("INVALID_PASSWORD")
                || message.starts_with("INVALID_LOGIN_CREDENTIALS")
            {
                return Err(IdentityError::InvalidCredentials);
            }
            return Err(IdentityError::Unavailable(message));
        }

        let body: SignInBody = response
            .json()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        Ok(SignedInUser {
            uid: body.local_id,
            email: body.email,
            email_verified: body.email_verified,
            id_token: body.id_token,
            expires_in: body.expires_in.parse().unwrap_or(3600),
        })
    }

    async fn close(&self) {
        // The HTTP client holds no server-side session; dropping the pool is
        // the whole teardown.
        log::info!(
            "identity provider handle released (project {})",
            self.project_id
        );
    }
}
