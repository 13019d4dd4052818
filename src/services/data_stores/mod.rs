pub mod bucket_object_store;
pub mod mock_identity_service;
pub mod mock_object_store;
pub mod rest_identity_service;

pub use bucket_object_store::*;
pub use mock_identity_service::*;
pub use mock_object_store::*;
pub use rest_identity_service::*;
