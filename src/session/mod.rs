//! Session-scoped key/value storage.
//!
//! Browsers expose `sessionStorage`; native builds and tests use an in-memory
//! map. Sandboxed contexts may refuse storage entirely, which callers treat as
//! "nothing stored".

#[cfg(target_arch = "wasm32")]
mod browser;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSessionStore;
pub use scroll::{plan_restore, save_scroll, take_scroll, ScrollRestore};

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("session storage rejected the operation: {0}")]
    Rejected(String),
}

/// String key/value store living for one browsing session
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store (native builds, tests)
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage that refuses every operation, like a sandboxed browsing context
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// The session store for the current environment.
///
/// On wasm32 this is the window's `sessionStorage`, falling back to
/// [`UnavailableStore`] when the browser refuses access. Elsewhere there is no
/// browsing session to persist into.
pub fn open_session_store() -> Box<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserSessionStore::open() {
            Ok(store) => return Box::new(store),
            Err(e) => tracing::debug!("Falling back to no session storage: {}", e),
        }
    }
    Box::new(UnavailableStore)
}
