// NOXENV Library
// Environment variables coerced to typed settings

pub mod config;

pub use config::{
    bool_env, int_env, list_env, parse_env, str_env, ConfigError, InMemoryEnv, ReadEnv,
    Settings, SystemEnv,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
