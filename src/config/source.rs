// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Environment sources
//! Everything the accessors read goes through [`ReadEnv`], so the process
//! environment can be swapped for a fixed map in tests.

use std::collections::HashMap;
use std::env::{self, VarError};
use std::sync::Arc;

/// Read-only view of a key/value environment.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;

    /// Present values are returned even when empty. Non-Unicode values are
    /// converted lossily rather than treated as missing.
    fn lookup(&self, key: &str) -> Option<String> {
        match self.var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
            Err(VarError::NotPresent) => None,
        }
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Arc<E> {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

/// Fixed set of variables, built up front and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEnv {
    vars: HashMap<String, String>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}
