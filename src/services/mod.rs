pub mod auth;
pub mod data_stores;
pub mod hashmap_token_cache;

pub use auth::*;
pub use data_stores::*;
pub use hashmap_token_cache::*;
