pub mod repository;

pub mod config;
pub use self::config::{AppConfigImpl, DatabaseConfig, ServerConfig};
