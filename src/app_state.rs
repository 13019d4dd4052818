use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{IdentityService, ObjectStore, TokenCache};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type TokenCacheType = Arc<RwLock<dyn TokenCache>>;
pub type IdentityServiceType = Arc<dyn IdentityService>;
pub type ObjectStoreType = Arc<dyn ObjectStore>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub token_cache: TokenCacheType,
    pub identity_service: IdentityServiceType,
    pub object_store: ObjectStoreType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        token_cache: TokenCacheType,
        identity_service: IdentityServiceType,
        object_store: ObjectStoreType,
        config: ConfigType,
    ) -> Self {
        Self {
            token_cache,
            identity_service,
            object_store,
            config,
        }
    }
}
