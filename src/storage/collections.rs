//! User-curated collections of prompt ids, persisted on every mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LocalStore, StorageBackend, STORAGE_COLLECTIONS};

/// A named grouping of prompt ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompts: Vec<String>,
    #[serde(default)]
    pub created_at: u64,
}

/// Caller-facing failures of collection mutations. Persistence failures are
/// absorbed by the storage layer and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The collection name was empty after trimming.
    Validation(String),
    /// A collection with this name already exists.
    DuplicateName(String),
    /// No collection matches the given id.
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(message) => write!(f, "{}", message),
            StoreError::DuplicateName(name) => {
                write!(f, "A collection named \"{}\" already exists", name)
            }
            StoreError::NotFound(_) => write!(f, "Collection not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The user's collections.
#[derive(Clone)]
pub struct Collections<B: StorageBackend = LocalStore> {
    backend: B,
    items: Vec<Collection>,
}

impl Collections<LocalStore> {
    /// Load collections from localStorage. Absent or corrupt data starts
    /// empty.
    pub fn load() -> Self {
        Self::with_backend(LocalStore)
    }
}

impl<B: StorageBackend> Collections<B> {
    pub fn with_backend(backend: B) -> Self {
        let items = super::load_or_default(&backend, STORAGE_COLLECTIONS);
        Self { backend, items }
    }

    /// Create a collection with a trimmed, non-empty, unique name and return
    /// it.
    pub fn create(&mut self, name: &str, description: Option<&str>) -> Result<Collection, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "Collection name cannot be empty".to_string(),
            ));
        }
        if self.items.iter().any(|c| c.name == name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let collection = Collection {
            id: super::generate_id(),
            name: name.to_string(),
            description: description.unwrap_or_default().trim().to_string(),
            prompts: Vec::new(),
            created_at: super::now_millis(),
        };
        self.items.push(collection.clone());
        self.persist();
        Ok(collection)
    }

    /// Add `prompt_id` to a collection. An id already in the collection is
    /// left alone.
    pub fn add_prompt(&mut self, collection_id: &str, prompt_id: &str) -> Result<(), StoreError> {
        let collection = self.find_mut(collection_id)?;
        if !collection.prompts.iter().any(|p| p == prompt_id) {
            collection.prompts.push(prompt_id.to_string());
            self.persist();
        }
        Ok(())
    }

    /// Remove every occurrence of `prompt_id` from a collection.
    pub fn remove_prompt(&mut self, collection_id: &str, prompt_id: &str) -> Result<(), StoreError> {
        let collection = self.find_mut(collection_id)?;
        collection.prompts.retain(|p| p != prompt_id);
        self.persist();
        Ok(())
    }

    /// Delete a collection. An unknown id is a quiet no-op.
    pub fn delete(&mut self, collection_id: &str) {
        let before = self.items.len();
        self.items.retain(|c| c.id != collection_id);
        if self.items.len() != before {
            self.persist();
        }
    }

    pub fn get(&self, collection_id: &str) -> Option<&Collection> {
        self.items.iter().find(|c| c.id == collection_id)
    }

    pub fn all(&self) -> &[Collection] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    fn find_mut(&mut self, collection_id: &str) -> Result<&mut Collection, StoreError> {
        self.items
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| StoreError::NotFound(collection_id.to_string()))
    }

    fn persist(&self) {
        let _ = super::persist(&self.backend, STORAGE_COLLECTIONS, &self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::super::MemoryStore;
    use super::*;

    fn store() -> Collections<MemoryStore> {
        Collections::with_backend(MemoryStore::new())
    }

    #[test]
    fn test_create_returns_collection() {
        let mut collections = store();
        let created = collections
            .create("Coding helpers", Some("Prompts for code tasks"))
            .unwrap();
        assert_eq!(created.name, "Coding helpers");
        assert_eq!(created.description, "Prompts for code tasks");
        assert!(created.prompts.is_empty());
        assert!(!created.id.is_empty());
        assert_eq!(collections.count(), 1);
    }

    #[test]
    fn test_create_trims_name() {
        let mut collections = store();
        let created = collections.create("  Writing  ", None).unwrap();
        assert_eq!(created.name, "Writing");
    }

    #[test]
    fn test_create_empty_name_fails() {
        let mut collections = store();
        assert!(matches!(
            collections.create("", None),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            collections.create("   ", None),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(collections.count(), 0);
    }

    #[test]
    fn test_create_duplicate_name_fails() {
        let mut collections = store();
        collections.create("Writing", None).unwrap();
        assert!(matches!(
            collections.create("Writing", None),
            Err(StoreError::DuplicateName(_))
        ));
        assert_eq!(collections.count(), 1);
    }

    #[test]
    fn test_add_prompt() {
        let mut collections = store();
        let id = collections.create("Writing", None).unwrap().id;
        collections.add_prompt(&id, "prompt-1").unwrap();
        collections.add_prompt(&id, "prompt-2").unwrap();
        assert_eq!(collections.get(&id).unwrap().prompts, ["prompt-1", "prompt-2"]);
    }

    #[test]
    fn test_add_prompt_deduplicates() {
        let mut collections = store();
        let id = collections.create("Writing", None).unwrap().id;
        collections.add_prompt(&id, "prompt-1").unwrap();
        collections.add_prompt(&id, "prompt-1").unwrap();
        assert_eq!(collections.get(&id).unwrap().prompts, ["prompt-1"]);
    }

    #[test]
    fn test_add_prompt_unknown_collection_fails() {
        let mut collections = store();
        let err = collections.add_prompt("nope", "prompt-1").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(err.to_string(), "Collection not found");
    }

    #[test]
    fn test_remove_prompt() {
        let mut collections = store();
        let id = collections.create("Writing", None).unwrap().id;
        collections.add_prompt(&id, "prompt-1").unwrap();
        collections.add_prompt(&id, "prompt-2").unwrap();
        collections.remove_prompt(&id, "prompt-1").unwrap();
        assert_eq!(collections.get(&id).unwrap().prompts, ["prompt-2"]);
    }

    #[test]
    fn test_remove_prompt_unknown_collection_fails() {
        let mut collections = store();
        assert!(matches!(
            collections.remove_prompt("nope", "prompt-1"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_collection() {
        let mut collections = store();
        let id = collections.create("Writing", None).unwrap().id;
        collections.delete(&id);
        assert!(collections.get(&id).is_none());
        assert_eq!(collections.count(), 0);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut collections = store();
        collections.create("Writing", None).unwrap();
        collections.delete("nope");
        assert_eq!(collections.count(), 1);
    }

    #[test]
    fn test_mutations_persist_to_backend() {
        let backend = MemoryStore::new();
        let mut collections = Collections::with_backend(backend.clone());
        let id = collections.create("Writing", Some("Drafts")).unwrap().id;
        collections.add_prompt(&id, "prompt-1").unwrap();

        let reloaded = Collections::with_backend(backend);
        let collection = reloaded.get(&id).unwrap();
        assert_eq!(collection.name, "Writing");
        assert_eq!(collection.description, "Drafts");
        assert_eq!(collection.prompts, ["prompt-1"]);
    }

    #[test]
    fn test_corrupt_persisted_data_starts_empty() {
        let backend = MemoryStore::preloaded(STORAGE_COLLECTIONS, "[{\"broken\":");
        let collections = Collections::with_backend(backend);
        assert_eq!(collections.count(), 0);
    }

    #[test]
    fn test_persisted_records_without_optional_fields_decode() {
        let raw = "[{\"id\":\"c1\",\"name\":\"Old\"}]";
        let backend = MemoryStore::preloaded(STORAGE_COLLECTIONS, raw);
        let collections = Collections::with_backend(backend);
        let collection = collections.get("c1").unwrap();
        assert_eq!(collection.name, "Old");
        assert!(collection.description.is_empty());
        assert!(collection.prompts.is_empty());
    }
}
