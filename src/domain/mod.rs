pub mod claims;
pub mod data_stores;
pub mod email;
pub mod login_request;
pub mod login_response;
pub mod password;
pub mod status_response;
pub mod upload_request;
pub mod upload_response;

pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use login_request::*;
pub use login_response::*;
pub use password::*;
pub use status_response::*;
pub use upload_request::*;
pub use upload_response::*;
