//! Session Persistence
//!
//! The session survives reloads through `localStorage`. Writing is a
//! subscriber on the session state, so store actions never touch storage.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::session::{Session, SessionStore};
use crate::error::StorageError;

/// Backend holding the serialized session
pub trait SessionStorage {
    fn load(&self) -> Result<Option<Session>, StorageError>;
    fn save(&self, session: &Session) -> Result<(), StorageError>;
}

fn encode(session: &Session) -> Result<String, StorageError> {
    Ok(serde_json::to_string(session)?)
}

fn decode(raw: &str) -> Result<Session, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

// ========================
// Backends
// ========================

/// `window.localStorage` under a fixed key
pub struct BrowserStorage {
    key: String,
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open(key: &str) -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self {
            key: key.to_string(),
            storage,
        })
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        let raw = self
            .storage
            .get_item(&self.key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.storage
            .set_item(&self.key, &encode(session)?)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory backend for hosts without `localStorage`
#[derive(Default)]
pub struct MemoryStorage {
    raw: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an already-serialized value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        self.raw.borrow().as_deref().map(decode).transpose()
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        *self.raw.borrow_mut() = Some(encode(session)?);
        Ok(())
    }
}

/// `localStorage` if the browser offers it, memory otherwise
pub fn open_storage(key: &str) -> Rc<dyn SessionStorage> {
    match BrowserStorage::open(key) {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            tracing::warn!(error = %err, "localStorage unavailable, session will not survive reload");
            Rc::new(MemoryStorage::new())
        }
    }
}

// ========================
// Restore / Persist
// ========================

/// Load the persisted session into the store.
///
/// Must run before the router's first guard evaluation.
pub fn restore(session: SessionStore, storage: &dyn SessionStorage) {
    match storage.load() {
        Ok(Some(saved)) => {
            tracing::info!(authenticated = saved.token.is_some(), "session restored");
            session.replace(saved);
        }
        Ok(None) => tracing::debug!("no persisted session"),
        Err(err) => tracing::warn!(error = %err, "discarding unreadable persisted session"),
    }
}

/// Write the full session out after every change
pub fn persist_on_change(session: SessionStore, storage: Rc<dyn SessionStorage>) {
    Effect::new(move |_| {
        let snapshot = session.track();
        if let Err(err) = storage.save(&snapshot) {
            tracing::warn!(error = %err, "failed to persist session");
        }
    });
}
