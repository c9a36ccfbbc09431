pub mod backend;
pub mod platform;

pub use backend::{resolve_backend_url, BackendConfig, ConfigError};
