//! Guarded Key/Value Storage
//!
//! [`SecureStorage`] wraps the host application's persistent key/value store
//! behind the [`StorageBackend`] seam. Two rules, both best-effort by
//! design: entries whose key or value looks like credential material are
//! refused (logged, never stored), and backend failures such as quota
//! exhaustion are logged and swallowed so a full store never takes the
//! application down with it.

use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Terms that mark an entry as credential material. Matched
/// case-insensitively against both key and value.
const SENSITIVE_TERMS: &[&str] = &[
    "password",
    "secret",
    "private",
    "ssn",
    "social security",
    "credit card",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// The host's persistent key/value store: get/set/remove by string key.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend with an optional capacity bound.
///
/// The capacity bound makes quota failures reproducible in tests; with no
/// bound it doubles as a default backend for processes without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity && !self.entries.contains_key(key) {
                return Err(StorageError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

pub struct SecureStorage<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> SecureStorage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Store `value` under `key` unless either looks like credential
    /// material. Refusals and backend failures are logged, never raised.
    pub fn set_item(&mut self, key: &str, value: &str) {
        if let Some(term) = find_sensitive_term(key, value) {
            warn!(key, term, "SEC: refusing to persist sensitive data");
            return;
        }
        if let Err(e) = self.backend.set(key, value) {
            warn!(key, "SEC: storage write failed: {}", e);
        }
    }

    /// Fetch the value for `key`; a backend failure is logged and read as
    /// absent.
    pub fn get_item(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, "SEC: storage read failed: {}", e);
                None
            }
        }
    }

    /// Remove `key`; a backend failure is logged and otherwise ignored.
    pub fn remove_item(&mut self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            warn!(key, "SEC: storage remove failed: {}", e);
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

fn find_sensitive_term(key: &str, value: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    let value = value.to_lowercase();
    SENSITIVE_TERMS
        .iter()
        .copied()
        .find(|term| key.contains(term) || value.contains(term))
}
