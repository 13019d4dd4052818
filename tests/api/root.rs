use crate::helpers::TestApp;

#[tokio::test]
async fn root_reports_liveness_payload() {
    let app = TestApp::new().await;

    let response = app.get_root().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["status"], "online");
    assert_eq!(body["environment"], "development");
    assert!(body["timestamp"].as_str().is_some());
    assert_eq!(body["endpoints"]["login"], "POST /api/login");
    assert_eq!(body["endpoints"]["userData"], "GET /api/user-data");
    assert_eq!(body["endpoints"]["upload"], "POST /api/storage/upload");
}
