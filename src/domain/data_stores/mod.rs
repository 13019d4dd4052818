pub mod identity_service;
pub mod object_store;
pub mod token_cache;

pub use identity_service::*;
pub use object_store::*;
pub use token_cache::*;
