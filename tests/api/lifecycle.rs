use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::helpers::claims_for;
use sabia_backend::app_state::AppState;
use sabia_backend::lifecycle::LifecycleState;
use sabia_backend::services::{HashmapTokenCache, MockIdentityService, MockObjectStore};
use sabia_backend::utils::Config;
use sabia_backend::Application;

async fn build_app(identity: Arc<MockIdentityService>) -> (Application, AppState) {
    let state = AppState::new(
        Arc::new(RwLock::new(HashmapTokenCache::with_defaults())),
        identity,
        Arc::new(MockObjectStore::new()),
        Arc::new(Config::for_tests()),
    );

    let app = Application::build(state.clone(), "127.0.0.1:0")
        .await
        .expect("Failed to build app");

    (app, state)
}

#[tokio::test]
async fn fatal_fault_drains_and_exits_zero_when_cleanup_succeeds() {
    let mut identity = MockIdentityService::new();
    identity.add_token("valid-token", claims_for("u1"));
    let identity = Arc::new(identity);

    let (app, state) = build_app(identity.clone()).await;
    let address = app.address.clone();
    let reporter = app.fault_reporter();
    let mut states = app.lifecycle_states();

    let run = tokio::spawn(app.run());

    // Warm the cache with one authenticated request while still Running.
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/user-data", address))
        .header("Authorization", "Bearer valid-token")
        .send()
        .await
        .expect("request should succeed while running");
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(state.token_cache.read().await.len().await, 1);
    assert_eq!(*states.borrow_and_update(), LifecycleState::Running);

    reporter.report_fatal("subscription-pump", "channel closed".into());

    let code = tokio::time::timeout(Duration::from_secs(10), run)
        .await
        .expect("drain should finish inside the grace period")
        .expect("run task should not panic");

    assert_eq!(code, 0);
    assert_eq!(*states.borrow_and_update(), LifecycleState::Stopped);

    // Cleanup released the provider handle and emptied the cache.
    assert!(identity.was_closed());
    assert_eq!(state.token_cache.read().await.len().await, 0);

    // The listener no longer accepts connections.
    let refused = client
        .get(format!("{}/", address))
        .send()
        .await;
    assert!(refused.is_err());
}

#[tokio::test]
async fn nonfatal_fault_keeps_the_server_running() {
    let identity = Arc::new(MockIdentityService::new());
    let (app, _state) = build_app(identity).await;
    let address = app.address.clone();
    let reporter = app.fault_reporter();
    let mut states = app.lifecycle_states();

    let run = tokio::spawn(app.run());

    reporter.report("delivery-retry", "transient failure".into());
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", address))
        .send()
        .await
        .expect("server should still accept requests");
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(*states.borrow_and_update(), LifecycleState::Running);

    run.abort();
}
