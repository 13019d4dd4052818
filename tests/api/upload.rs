use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde_json::json;

use crate::helpers::{claims_for, TestApp};
use sabia_backend::services::MockIdentityService;

async fn authed_app() -> TestApp {
    let mut identity = MockIdentityService::new();
    identity.add_token("valid-token", claims_for("u1"));
    TestApp::with_identity(identity).await
}

#[tokio::test]
async fn upload_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/storage/upload", &app.address))
        .json(&json!({ "fileName": "a.txt", "data": "aGk=" }))
        .send()
        .await
        .expect("Failed to execute upload request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn upload_saves_and_returns_public_url() {
    let app = authed_app().await;
    let data = B64.encode(b"hello sabia");

    let response = app
        .upload(
            "valid-token",
            json!({ "fileName": "notes/hello.txt", "contentType": "text/plain", "data": data }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["url"], "https://storage.mock.local/notes/hello.txt");

    let saved = app.object_store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].file_name, "notes/hello.txt");
    assert_eq!(saved[0].content_type, "text/plain");
    assert_eq!(saved[0].size, b"hello sabia".len());
}

#[tokio::test]
async fn upload_rejects_missing_fields() {
    let app = authed_app().await;

    let response = app
        .upload("valid-token", json!({ "fileName": "a.txt" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Nome do arquivo e conteúdo são obrigatórios");
}

#[tokio::test]
async fn upload_rejects_undecodable_payload() {
    let app = authed_app().await;

    let response = app
        .upload(
            "valid-token",
            json!({ "fileName": "a.txt", "data": "not base64!!!" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Conteúdo do arquivo não é base64 válido");
}

#[tokio::test]
async fn upload_maps_store_outage_to_500() {
    let app = authed_app().await;
    app.object_store.set_failing(true);

    let response = app
        .upload("valid-token", json!({ "fileName": "a.txt", "data": "aGk=" }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Erro interno no servidor");
}
