use serde_json::json;

use crate::helpers::{get_random_email, TestApp};
use sabia_backend::services::MockIdentityService;

#[tokio::test]
async fn should_return_400_if_fields_are_missing() {
    let app = TestApp::new().await;

    let response = app
        .login_with_body(json!({ "email": get_random_email() }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email e senha são obrigatórios");
}

#[tokio::test]
async fn should_return_400_if_email_is_malformed() {
    let app = TestApp::new().await;

    let response = app.login("not-an-email", "Password123!").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email inválido");
}

#[tokio::test]
async fn should_return_404_if_user_is_unknown() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_email(), "Password123!").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Usuário não encontrado");
}

#[tokio::test]
async fn should_return_500_on_other_provider_rejections() {
    let mut identity = MockIdentityService::new();
    identity.add_user("known@example.com", "RightPassword1!", "u1", true);
    let app = TestApp::with_identity(identity).await;

    let response = app.login("known@example.com", "WrongPassword1!").await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Erro interno no servidor");
}

#[tokio::test]
async fn should_return_token_and_user_payload_on_success() {
    let mut identity = MockIdentityService::new();
    identity.add_user("x@y.com", "Password123!", "u1", true);
    let app = TestApp::with_identity(identity).await;

    let response = app.login("x@y.com", "Password123!").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["uid"], "u1");
    assert_eq!(body["user"]["email"], "x@y.com");
    assert_eq!(body["user"]["emailVerified"], true);
    assert_eq!(body["expiresIn"], 3600);

    // The issued token is accepted by the gate afterwards.
    let token = body["token"].as_str().expect("token expected").to_owned();
    let response = app.get_user_data(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);
}
