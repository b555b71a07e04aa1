// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Typed settings loaded from an environment source

use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use super::error::ConfigError;
use super::source::{ReadEnv, SystemEnv};

/// Values that switch a boolean setting off. Matched exactly.
const FALSE_VALUES: [&str; 3] = ["False", "false", "0"];

/// Coerces variables from `E` into typed values, falling back to defaults.
#[derive(Debug, Clone, Default)]
pub struct Settings<E = SystemEnv> {
    env: E,
}

impl Settings<SystemEnv> {
    /// Settings backed by the process environment.
    pub fn system() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: ReadEnv> Settings<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Raw value of `name`. Empty values count as present.
    pub fn get_opt(&self, name: &str) -> Option<String> {
        let value = self.env.lookup(name);
        if value.is_none() {
            debug!(key = name, "environment variable not set, using default");
        }
        value
    }

    /// `"False"`, `"false"`, `"0"` and `""` are false, anything else is true.
    /// Only exact matches are recognised, so `"FALSE"` is true.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.get_opt(name) {
            Some(value) => !value.is_empty() && !FALSE_VALUES.contains(&value.as_str()),
            None => default,
        }
    }

    /// Base-10 integer. Surrounding whitespace, a leading sign and single `_`
    /// separators between digits (`1_000`) are accepted.
    pub fn get_int(&self, name: &str, default: i64) -> Result<i64, ConfigError> {
        self.parse_with(name, default, |raw| strip_digit_separators(raw.trim()).parse())
    }

    pub fn get_parsed<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.parse_with(name, default, |raw| raw.trim().parse())
    }

    fn parse_with<T, Err, F>(&self, name: &str, default: T, parse: F) -> Result<T, ConfigError>
    where
        Err: Display,
        F: FnOnce(&str) -> Result<T, Err>,
    {
        match self.get_opt(name) {
            Some(value) => parse(value.as_str()).map_err(|e| {
                debug!(key = name, "environment variable failed to parse");
                ConfigError::ParseError {
                    key: name.to_string(),
                    value,
                    message: e.to_string(),
                }
            }),
            None => Ok(default),
        }
    }

    pub fn get_str(&self, name: &str, default: &str) -> String {
        self.get_opt(name).unwrap_or_else(|| default.to_string())
    }

    /// Comma separated list. Segments are kept verbatim, empty ones included.
    /// An unset or empty variable yields `default`, or an empty list.
    pub fn get_list(&self, name: &str, default: Option<Vec<String>>) -> Vec<String> {
        let value = self.get_str(name, "");
        if value.is_empty() {
            return default.unwrap_or_default();
        }
        value.split(',').map(str::to_string).collect()
    }
}

/// Drops `_` only when it sits between two ASCII digits. Any other underscore
/// is kept so the parse rejects it.
fn strip_digit_separators(raw: &str) -> String {
    let bytes = raw.as_bytes();
    raw.char_indices()
        .filter(|&(i, c)| {
            c != '_'
                || i == 0
                || !bytes[i - 1].is_ascii_digit()
                || !bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        })
        .map(|(_, c)| c)
        .collect()
}

pub fn bool_env(name: &str, default: bool) -> bool {
    Settings::system().get_bool(name, default)
}

pub fn int_env(name: &str, default: i64) -> Result<i64, ConfigError> {
    Settings::system().get_int(name, default)
}

pub fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    Settings::system().get_parsed(name, default)
}

pub fn str_env(name: &str, default: &str) -> String {
    Settings::system().get_str(name, default)
}

pub fn list_env(name: &str, default: Option<Vec<String>>) -> Vec<String> {
    Settings::system().get_list(name, default)
}
