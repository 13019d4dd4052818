use std::env;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        }
    }
}

#[derive(Clone)]
pub struct Config {
    host: String,
    port: u16,
    app_env: AppEnv,
    frontend_url: String,
    identity_project_id: String,
    identity_api_key: String,
    identity_base_url: String,
    identity_timeout_seconds: u64,
    storage_bucket: String,
    storage_base_url: String,
    storage_timeout_seconds: u64,
}

impl Config {
    pub fn host(&self) -> &str {
        &self.host
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
    pub fn app_env(&self) -> AppEnv {
        self.app_env
    }
    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }
    pub fn frontend_url(&self) -> &str {
        &self.frontend_url
    }
    pub fn identity_project_id(&self) -> &str {
        &self.identity_project_id
    }
    pub fn identity_api_key(&self) -> &str {
        &self.identity_api_key
    }
    pub fn identity_base_url(&self) -> &str {
        &self.identity_base_url
    }
    pub fn identity_timeout_seconds(&self) -> u64 {
        self.identity_timeout_seconds
    }
    pub fn storage_bucket(&self) -> &str {
        &self.storage_bucket
    }
    pub fn storage_base_url(&self) -> &str {
        &self.storage_base_url
    }
    pub fn storage_timeout_seconds(&self) -> u64 {
        self.storage_timeout_seconds
    }

    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let host = opt_var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = opt_var("PORT")
            .map(|v| v.parse::<u16>().map_err(|_| ConfigError::Invalid("PORT")))
            .transpose()?
            .unwrap_or(3001);

        let app_env = match opt_var("APP_ENV").as_deref() {
            Some("production") => AppEnv::Production,
            _ => AppEnv::Development,
        };

        let frontend_url =
            opt_var("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".into());

        let identity_project_id = req_var("IDENTITY_PROJECT_ID")?;
        let identity_api_key = req_var("IDENTITY_API_KEY")?;
        let identity_base_url = opt_var("IDENTITY_BASE_URL")
            .unwrap_or_else(|| "https://identitytoolkit.googleapis.com".into());
        let identity_timeout_seconds = opt_var("IDENTITY_TIMEOUT_SECONDS")
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| ConfigError::Invalid("IDENTITY_TIMEOUT_SECONDS"))
            })
            .transpose()?
            .unwrap_or(10);

        let storage_bucket = req_var("STORAGE_BUCKET")?;
        let storage_base_url = opt_var("STORAGE_BASE_URL")
            .unwrap_or_else(|| "https://storage.googleapis.com".into());
        let storage_timeout_seconds = opt_var("STORAGE_TIMEOUT_SECONDS")
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| ConfigError::Invalid("STORAGE_TIMEOUT_SECONDS"))
            })
            .transpose()?
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            app_env,
            frontend_url,
            identity_project_id,
            identity_api_key,
            identity_base_url,
            identity_timeout_seconds,
            storage_bucket,
            storage_base_url,
            storage_timeout_seconds,
        })
    }

    /// Fixed configuration for test harnesses; skips environment loading.
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            app_env: AppEnv::Development,
            frontend_url: "http://localhost:3000".into(),
            identity_project_id: "test-project".into(),
            identity_api_key: "test-key".into(),
            identity_base_url: "http://127.0.0.1:1".into(),
            identity_timeout_seconds: 2,
            storage_bucket: "test-bucket".into(),
            storage_base_url: "http://127.0.0.1:1".into(),
            storage_timeout_seconds: 2,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
