//! Backup Import/Export
//!
//! Moves the whole collection between the store and a JSON file.
//! Works on the store directly; the repository is not involved.

use chrono::NaiveDate;

use crate::domain::{Todo, TodoError, TodoResult};
use crate::repository::{Storage, TodoStore};

/// A backup ready to be offered as a download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
    pub count: usize,
}

/// `<prefix>-YYYY-MM-DD.json`
pub fn backup_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Serialize the stored collection as pretty-printed JSON
pub fn export<S: Storage>(store: &TodoStore<S>, prefix: &str, date: NaiveDate) -> TodoResult<ExportFile> {
    let todos = store.load();
    let contents = serde_json::to_string_pretty(&todos)?;
    Ok(ExportFile {
        file_name: backup_file_name(prefix, date),
        contents,
        count: todos.len(),
    })
}

/// Parse backup file contents.
///
/// The top level must be a JSON array; that is the only check. Entries are
/// taken as given, with missing or odd fields defaulted by `Todo::from_value`.
pub fn parse_import(text: &str) -> TodoResult<Vec<Todo>> {
    match serde_json::from_str::<serde_json::Value>(text)? {
        serde_json::Value::Array(entries) => Ok(entries.into_iter().map(Todo::from_value).collect()),
        _ => Err(TodoError::NotAList),
    }
}

/// Replace the stored collection with the file's contents.
///
/// On any error the store is left untouched.
pub fn import<S: Storage>(store: &TodoStore<S>, text: &str) -> TodoResult<Vec<Todo>> {
    let todos = parse_import(text)?;
    store.save(&todos)?;
    log::info!("Imported {} todos", todos.len());
    Ok(todos)
}
