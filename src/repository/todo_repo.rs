//! Todo Repository
//!
//! Collection operations. Each one reads the stored collection, applies the
//! change, writes it back and returns the result for rendering. Operations
//! that turn out to change nothing skip the write.

use crate::domain::{next_id, Todo, TodoResult};
use super::storage::Storage;
use super::todo_store::TodoStore;

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct TodoRepository<S: Storage> {
    store: TodoStore<S>,
    clock: fn() -> i64,
}

impl<S: Storage> TodoRepository<S> {
    pub fn new(store: TodoStore<S>) -> Self {
        Self {
            store,
            clock: now_millis,
        }
    }

    /// Replace the id clock (milliseconds since epoch)
    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    /// Current collection, unchanged
    pub fn list(&self) -> Vec<Todo> {
        self.store.load()
    }

    /// Prepend a new open item. Blank text is ignored.
    pub fn add(&self, text: &str) -> TodoResult<Vec<Todo>> {
        let mut todos = self.store.load();
        let text = text.trim();
        if text.is_empty() {
            return Ok(todos);
        }

        let id = next_id((self.clock)(), &todos);
        log::debug!("Adding todo {}", id);
        todos.insert(0, Todo::new(id, text.to_string()));
        self.store.save(&todos)?;
        Ok(todos)
    }

    pub fn delete(&self, id: &str) -> TodoResult<Vec<Todo>> {
        let mut todos = self.store.load();
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() != before {
            log::debug!("Deleted todo {}", id);
            self.store.save(&todos)?;
        }
        Ok(todos)
    }

    pub fn toggle(&self, id: &str) -> TodoResult<Vec<Todo>> {
        let mut todos = self.store.load();
        if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
            log::debug!("Toggled todo {} -> completed={}", id, todo.completed);
            self.store.save(&todos)?;
        }
        Ok(todos)
    }

    /// Replace an item's text. Blank or unchanged text is a no-op.
    pub fn edit(&self, id: &str, new_text: &str) -> TodoResult<Vec<Todo>> {
        let mut todos = self.store.load();
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(todos);
        }

        match todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) if todo.text != new_text => {
                todo.text = new_text.to_string();
                log::debug!("Edited todo {}", id);
            }
            _ => return Ok(todos),
        }
        self.store.save(&todos)?;
        Ok(todos)
    }

    /// Remove every completed item
    pub fn clear_completed(&self) -> TodoResult<Vec<Todo>> {
        let mut todos = self.store.load();
        let before = todos.len();
        todos.retain(|todo| !todo.completed);
        if todos.len() != before {
            log::debug!("Cleared {} completed todos", before - todos.len());
            self.store.save(&todos)?;
        }
        Ok(todos)
    }
}
