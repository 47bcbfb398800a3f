//! # Interaction Store
//!
//! Per-vlog [`ReactionState`] for the local user, persisted as one JSON text blob under
//! [`INTERACTIONS_KEY`], e.g. `{"a1": "like", "b2": null, "c3": "dislike"}`.
//!
//! Entries are never removed. Resetting a reaction stores `null`.
use std::collections::HashMap;

use tracing::warn;

use crate::{
    reaction::ReactionState,
    storage::{LocalStorage, StorageError},
};

pub const INTERACTIONS_KEY: &str = "vlogSphereInteractions";

pub type Interactions = HashMap<String, ReactionState>;

pub struct InteractionStore<S> {
    storage: S,
    interactions: Interactions,
}

impl<S: LocalStorage> InteractionStore<S> {
    /// Opens the store and loads whatever was persisted.
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            storage,
            interactions: Interactions::new(),
        };
        store.load_all();

        store
    }

    /// Replaces the in-memory map with the persisted one. Anything unreadable resets to empty;
    /// no partial recovery is attempted.
    pub fn load_all(&mut self) -> &Interactions {
        self.interactions = match self.storage.get_item(INTERACTIONS_KEY) {
            Ok(Some(saved)) => serde_json::from_str(&saved).unwrap_or_else(|e| {
                warn!("Error loading user interactions, starting empty: {e}");
                Interactions::new()
            }),
            Ok(None) => Interactions::new(),
            Err(e) => {
                warn!("Error reading user interactions, starting empty: {e}");
                Interactions::new()
            }
        };

        &self.interactions
    }

    pub fn persist_all(&mut self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.interactions)?;

        self.storage.set_item(INTERACTIONS_KEY, &blob)
    }

    pub fn get(&self, vlog_id: &str) -> ReactionState {
        self.interactions.get(vlog_id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, vlog_id: &str, state: ReactionState) {
        self.interactions.insert(vlog_id.to_string(), state);
    }

    pub fn all(&self) -> &Interactions {
        &self.interactions
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        storage::{FileStorage, MemoryStorage},
        testing::CapturedLogs,
    };

    #[test]
    fn test_absent_is_none() {
        let store = InteractionStore::load(MemoryStorage::default());

        assert_eq!(store.get("unknown"), ReactionState::None);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_corrupt_blob_resets_to_empty() {
        let mut storage = MemoryStorage::default();
        storage.set_item(INTERACTIONS_KEY, "{\"a\": \"lik").unwrap();

        let (logs, _guard) = CapturedLogs::install();
        let store = InteractionStore::load(storage);

        assert!(store.all().is_empty());
        assert!(logs.contents().contains("WARN"));
        assert!(logs.contents().contains("Error loading user interactions, starting empty"));
    }

    #[test]
    fn test_unknown_reaction_resets_to_empty() {
        let mut storage = MemoryStorage::default();
        storage
            .set_item(INTERACTIONS_KEY, r#"{"a": "like", "b": "love"}"#)
            .unwrap();

        let store = InteractionStore::load(storage);
        assert_eq!(store.get("a"), ReactionState::None);
    }

    #[test]
    fn test_reset_reaction_is_kept_as_null() {
        let mut store = InteractionStore::load(MemoryStorage::default());
        store.set("a", ReactionState::Liked);
        store.set("b", ReactionState::None);
        store.persist_all().unwrap();

        let blob = store.storage().get_item(INTERACTIONS_KEY).unwrap().unwrap();
        let raw: serde_json::Value = serde_json::from_str(&blob).unwrap();

        assert_eq!(raw["a"], "like");
        assert!(raw["b"].is_null());
        assert_eq!(raw.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_survives_reopen_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = InteractionStore::load(FileStorage::new(&path));
        store.set("a", ReactionState::Disliked);
        store.set("b", ReactionState::Liked);
        store.persist_all().unwrap();

        let reopened = InteractionStore::load(FileStorage::new(&path));
        assert_eq!(reopened.get("a"), ReactionState::Disliked);
        assert_eq!(reopened.get("b"), ReactionState::Liked);
        assert_eq!(reopened.all(), store.all());
    }
}
