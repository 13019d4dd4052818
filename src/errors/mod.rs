mod auth;
mod login;
mod upload;

pub use auth::*;
pub use login::*;
pub use upload::*;
