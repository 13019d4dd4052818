use std::sync::Arc;

use sabia_backend::app_state::{AppState, IdentityServiceType, ObjectStoreType, TokenCacheType};
use sabia_backend::services::{BucketObjectStore, HashmapTokenCache, RestIdentityService};
use sabia_backend::utils::Config;
use sabia_backend::Application;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::default().expect("Failed to load config"));
    log::info!(
        "environment: {} (port {})",
        config.app_env().as_str(),
        config.port()
    );

    let identity_service: IdentityServiceType = Arc::new(
        RestIdentityService::new(&config).expect("Failed to build identity provider client"),
    );
    let object_store: ObjectStoreType =
        Arc::new(BucketObjectStore::new(&config).expect("Failed to build object store client"));
    let token_cache: TokenCacheType = Arc::new(RwLock::new(HashmapTokenCache::with_defaults()));

    let app_state = AppState::new(token_cache, identity_service, object_store, config.clone());

    let app = Application::build(app_state, &config.addr())
        .await
        .expect("Failed to build app");

    let code = app.run().await;
    std::process::exit(code);
}
