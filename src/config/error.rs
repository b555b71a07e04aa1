// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Configuration error types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Parse error for {key}: '{value}' - {message}")]
    ParseError {
        key: String,
        value: String,
        message: String,
    },

    #[error("Failed to read env file {}: {message}", .path.display())]
    Dotenv { path: PathBuf, message: String },
}

impl ConfigError {
    /// Name of the variable that failed to parse, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::ParseError { key, .. } => Some(key),
            ConfigError::Dotenv { .. } => None,
        }
    }
}
