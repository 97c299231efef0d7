//! Key-Value Storage
//!
//! The persistence boundary. The browser uses `window.localStorage`;
//! tests and storage-less browsers use an in-memory map.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::domain::{TodoError, TodoResult};

/// String key-value slot store
pub trait Storage {
    /// Read a slot. `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> TodoResult<Option<String>>;

    /// Overwrite a slot with `value`
    fn set_item(&self, key: &str, value: &str) -> TodoResult<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> TodoResult<()> {
        (**self).set_item(key, value)
    }
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the page's local storage.
    ///
    /// Fails when there is no window or the browser denies access
    /// (e.g. storage disabled by privacy settings).
    pub fn open() -> TodoResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| TodoError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| TodoError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| TodoError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> TodoResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))
    }
}

/// In-memory storage, lost on reload
#[derive(Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_item` calls so far
    #[cfg(test)]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> TodoResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
