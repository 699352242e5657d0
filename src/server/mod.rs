pub mod config;
pub mod core;
pub mod handlers;

pub use config::ServerConfig;
pub use self::core::serve;
