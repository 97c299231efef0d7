//! List View Model
//!
//! Pure rendering step: collection and filter in, row descriptors out.
//! The whole list is rebuilt on every call; the UI layer materializes it.

use crate::domain::{Filter, Todo};

/// What a row control does when activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Checkbox change
    Toggle(String),
    /// Label double-click or edit button
    StartEdit(String),
    /// Delete button
    Delete(String),
}

/// One visible item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Completed items must be unchecked before editing
    pub editable: bool,
}

impl TodoRow {
    pub fn toggle_action(&self) -> RowAction {
        RowAction::Toggle(self.id.clone())
    }

    pub fn edit_action(&self) -> RowAction {
        RowAction::StartEdit(self.id.clone())
    }

    pub fn delete_action(&self) -> RowAction {
        RowAction::Delete(self.id.clone())
    }
}

/// Everything the list area needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoListView {
    pub rows: Vec<TodoRow>,
    /// Shown when the full collection is empty, whatever the filter
    pub show_empty: bool,
    pub total: usize,
    pub active_count: usize,
    pub completed_count: usize,
}

impl TodoListView {
    /// Completion state of a visible row
    pub fn is_completed(&self, id: &str) -> Option<bool> {
        self.rows.iter().find(|row| row.id == id).map(|row| row.completed)
    }
}

/// `1 item`, `3 items`
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn render(todos: &[Todo], filter: Filter) -> TodoListView {
    let rows = todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .map(|todo| TodoRow {
            id: todo.id.clone(),
            text: todo.text.clone(),
            completed: todo.completed,
            editable: !todo.completed,
        })
        .collect();

    let completed_count = todos.iter().filter(|todo| todo.completed).count();
    TodoListView {
        rows,
        show_empty: todos.is_empty(),
        total: todos.len(),
        active_count: todos.len() - completed_count,
        completed_count,
    }
}
