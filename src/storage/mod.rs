//! Centralized storage module for localStorage operations.

use leptos::logging;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod collections;
pub mod favorites;

// Storage keys
pub const STORAGE_FAVORITES: &str = "promptdeck.favorites";
pub const STORAGE_COLLECTIONS: &str = "promptdeck.collections";
pub const STORAGE_FILTER: &str = "promptdeck.filter";

/// Raw key-value persistence used by the stores.
///
/// Implementations report failure through the return values and never panic;
/// a store whose backend fails keeps operating on its in-memory state.
pub trait StorageBackend {
    /// Read the raw value under `key`, `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;
    /// Write `raw` under `key`, returning whether the write landed.
    fn save(&self, key: &str, raw: &str) -> bool;
}

/// `window.localStorage`-backed implementation used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn raw_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl StorageBackend for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        raw_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, raw: &str) -> bool {
        let Some(storage) = raw_storage() else {
            logging::warn!("storage: localStorage unavailable, {} kept in memory only", key);
            return false;
        };
        match storage.set_item(key, raw) {
            Ok(()) => true,
            Err(err) => {
                // Quota errors land here; the caller carries on in memory.
                logging::error!("storage: failed to write {}: {:?}", key, err);
                false
            }
        }
    }
}

/// Decode the value under `key`, falling back to `T::default()`.
///
/// An absent key is the normal first-run case and stays silent; a present but
/// undecodable value is logged and discarded.
pub(crate) fn load_or_default<T, B>(backend: &B, key: &str) -> T
where
    T: DeserializeOwned + Default,
    B: StorageBackend,
{
    let Some(raw) = backend.load(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            logging::error!("storage: discarding corrupt entry under {}: {}", key, err);
            T::default()
        }
    }
}

/// Encode `value` and write it under `key`, returning whether it landed.
pub(crate) fn persist<T, B>(backend: &B, key: &str, value: &T) -> bool
where
    T: Serialize,
    B: StorageBackend,
{
    match serde_json::to_string(value) {
        Ok(raw) => backend.save(key, &raw),
        Err(err) => {
            logging::error!("storage: failed to encode {}: {}", key, err);
            false
        }
    }
}

/// Generate a unique identifier for client-created records.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current timestamp in milliseconds.
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Current timestamp in milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Shared in-memory backend for store tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct MemoryStore(
    std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
);

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend seeded with a raw value, for corruption and migration cases.
    pub fn preloaded(key: &str, raw: &str) -> Self {
        let store = Self::new();
        store.0.borrow_mut().insert(key.to_string(), raw.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, raw: &str) -> bool {
        self.0.borrow_mut().insert(key.to_string(), raw.to_string());
        true
    }
}
