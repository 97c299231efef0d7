//! Todo Store
//!
//! Maps the whole collection to one JSON value in a storage slot.
//! Every save replaces the previous value; there are no partial writes.

use crate::domain::{Todo, TodoResult};
use super::storage::Storage;

pub struct TodoStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> TodoStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the collection.
    ///
    /// A missing slot is an empty list. Unreadable or corrupt data is logged
    /// and discarded; the caller always gets a usable collection.
    pub fn load(&self) -> Vec<Todo> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Todo>>(&raw) {
            Ok(todos) => todos,
            Err(e) => {
                log::warn!("Discarding unparseable data in '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full collection
    pub fn save(&self, todos: &[Todo]) -> TodoResult<()> {
        let json = serde_json::to_string(todos)?;
        self.storage.set_item(&self.key, &json)?;
        log::debug!("Saved {} todos to '{}'", todos.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    #[test]
    fn test_missing_slot_loads_empty() {
        let store = TodoStore::new(MemoryStorage::new(), "todos");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("todos", "{not json").unwrap();
        let store = TodoStore::new(storage, "todos");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("todos", r#"{"not":"a list"}"#).unwrap();
        let store = TodoStore::new(storage, "todos");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_odd_entries_do_not_discard_list() {
        let storage = MemoryStorage::new();
        storage
            .set_item("todos", r#"[{"id":"1","text":"keep me"},{"text":"no id"},7]"#)
            .unwrap();
        let store = TodoStore::new(storage, "todos");

        let todos = store.load();
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0], Todo::new("1".to_string(), "keep me".to_string()));
        assert_eq!(todos[1].text, "no id");
        assert_eq!(todos[2].text, "7");
    }

    #[test]
    fn test_save_then_load() {
        let store = TodoStore::new(MemoryStorage::new(), "todos");
        let todos = vec![
            Todo::new("2".to_string(), "walk dog".to_string()),
            Todo::new("1".to_string(), "buy milk".to_string()),
        ];
        store.save(&todos).unwrap();
        assert_eq!(store.load(), todos);
    }

    #[test]
    fn test_reads_legacy_page_format() {
        let storage = MemoryStorage::new();
        storage
            .set_item("todos", r#"[{"id":"1700000000000","text":"buy milk","completed":true}]"#)
            .unwrap();
        let store = TodoStore::new(storage, "todos");

        let todos = store.load();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "buy milk");
        assert!(todos[0].completed);
    }
}
