// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! NOXENV Configuration Module
//! Typed access to environment variables with defaults.

mod dotenv;
mod error;
mod loader;
mod source;

pub use error::ConfigError;
pub use loader::{bool_env, int_env, list_env, parse_env, str_env, Settings};
pub use source::{InMemoryEnv, ReadEnv, SystemEnv};
