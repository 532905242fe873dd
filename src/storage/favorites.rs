//! Favorited prompt ids: order-preserving, duplicate-free, persisted on
//! every mutation.

use std::collections::HashSet;

use super::{LocalStore, StorageBackend, STORAGE_FAVORITES};

/// The user's favorited prompt ids.
///
/// The `Vec` keeps insertion order and is the persisted shape; the `HashSet`
/// answers membership.
#[derive(Clone)]
pub struct Favorites<B: StorageBackend = LocalStore> {
    backend: B,
    ids: Vec<String>,
    index: HashSet<String>,
}

impl Favorites<LocalStore> {
    /// Load favorites from localStorage. Absent or corrupt data starts empty.
    pub fn load() -> Self {
        Self::with_backend(LocalStore)
    }
}

impl<B: StorageBackend> Favorites<B> {
    pub fn with_backend(backend: B) -> Self {
        let ids: Vec<String> = super::load_or_default(&backend, STORAGE_FAVORITES);
        let index = ids.iter().cloned().collect();
        Self { backend, ids, index }
    }

    /// Add `id` to the favorites. Empty ids and ids already present are
    /// ignored.
    pub fn add(&mut self, id: &str) {
        if id.is_empty() || self.index.contains(id) {
            return;
        }
        self.ids.push(id.to_string());
        self.index.insert(id.to_string());
        self.persist();
    }

    /// Remove every occurrence of `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        if !self.index.remove(id) {
            return;
        }
        self.ids.retain(|existing| existing != id);
        self.persist();
    }

    /// Flip membership of `id`, returning the resulting state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Favorited ids in the order they were added.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn clear(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        self.ids.clear();
        self.index.clear();
        self.persist();
    }

    fn persist(&self) {
        let _ = super::persist(&self.backend, STORAGE_FAVORITES, &self.ids);
    }
}
