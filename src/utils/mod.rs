pub mod config;
pub mod consts;

pub use config::{AppEnv, Config};
pub use consts::*;
