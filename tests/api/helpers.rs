use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use sabia_backend::app_router;
use sabia_backend::app_state::AppState;
use sabia_backend::domain::UserClaims;
use sabia_backend::services::{HashmapTokenCache, MockIdentityService, MockObjectStore};
use sabia_backend::utils::Config;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub identity_service: Arc<MockIdentityService>,
    pub object_store: Arc<MockObjectStore>,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_identity(MockIdentityService::new()).await
    }

    pub async fn with_identity(identity: MockIdentityService) -> Self {
        let identity = Arc::new(identity);
        let object_store = Arc::new(MockObjectStore::new());
        let state = AppState::new(
            Arc::new(RwLock::new(HashmapTokenCache::with_defaults())),
            identity.clone(),
            object_store.clone(),
            Arc::new(Config::for_tests()),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(state.clone()));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            identity_service: identity,
            object_store,
            state,
        }
    }

    pub async fn get_root(&self) -> Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute root request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.login_with_body(json!({ "email": email, "password": password }))
            .await
    }

    pub async fn login_with_body(&self, body: serde_json::Value) -> Response {
        self.http_client
            .post(format!("{}/api/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn get_user_data(&self, bearer_token: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/api/user-data", &self.address));
        if let Some(token) = bearer_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
            .send()
            .await
            .expect("Failed to execute user-data request.")
    }

    pub async fn get_user_data_with_header(&self, authorization: &str) -> Response {
        self.http_client
            .get(format!("{}/api/user-data", &self.address))
            .header("Authorization", authorization)
            .send()
            .await
            .expect("Failed to execute user-data request.")
    }

    pub async fn upload(&self, bearer_token: &str, body: serde_json::Value) -> Response {
        self.http_client
            .post(format!("{}/api/storage/upload", &self.address))
            .header("Authorization", format!("Bearer {}", bearer_token))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute upload request.")
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub fn claims_for(uid: &str) -> UserClaims {
    UserClaims {
        uid: uid.to_owned(),
        email: Some(format!("{}@example.com", uid)),
        email_verified: true,
        issued_at: 0,
        expires_at: 3600,
    }
}
