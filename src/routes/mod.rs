pub(crate) mod login;
pub(crate) mod status;
pub(crate) mod upload;
pub(crate) mod user_data;

// re-export items from sub-modules
pub use login::*;
pub use status::*;
pub use upload::*;
pub use user_data::*;
